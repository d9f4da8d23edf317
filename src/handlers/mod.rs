use actix_web::web::{self, ServiceConfig};

use crate::auth::login;
use crate::config::AppState;
use crate::error::AppError;

pub mod playlist;
pub mod song;
pub mod user;

pub use playlist::*;
pub use song::*;
pub use user::*;

fn json_config() -> web::JsonConfig {
    // Bodies are read as JSON whatever Content-Type the client sent.
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|_, _| AppError::validation("Invalid JSON input").into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|_, _| AppError::validation("Invalid query string").into())
}

/// Registers the state and every route on an app or test service.
pub fn configure(state: web::Data<AppState>) -> impl Fn(&mut ServiceConfig) + Clone {
    move |cfg: &mut ServiceConfig| {
        let expose_song_detail = state.expose_song_detail;

        cfg.app_data(state.clone())
            .app_data(json_config())
            .app_data(query_config())
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/viewProfile", web::post().to(view_profile))
            .route("/createPlaylist", web::post().to(create_playlist))
            .route(
                "/getAllSongsOfPlaylist/{playlist_id}",
                web::get().to(get_all_songs_of_playlist),
            )
            .route("/addSongToPlaylist", web::post().to(add_song_to_playlist))
            .route(
                "/deleteSongFromPlaylist",
                web::delete().to(delete_song_from_playlist),
            )
            .route("/deletePlaylist", web::delete().to(delete_playlist));

        if expose_song_detail {
            cfg.route("/getSongDetail", web::get().to(get_song_detail));
        }
    }
}
