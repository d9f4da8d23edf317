use actix_web::{web, HttpResponse};

use crate::auth::require_secret_code;
use crate::config::AppState;
use crate::error::{AppError, Result};
use crate::models::{AddSongRequest, SecretCodeQuery, SongQuery};
use crate::utils::parse_id;

pub async fn add_song_to_playlist(
    query: web::Query<SecretCodeQuery>,
    req: web::Json<AddSongRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let secret_code = require_secret_code(query.secret_code.as_deref())?;
    if req.playlist_id.is_empty() {
        return Err(AppError::validation("Invalid input data"));
    }
    let playlist_id = parse_id(Some(req.playlist_id.as_str()), "playlist")?;

    let req = req.into_inner();
    let playlist = state.store.add_song(secret_code, &playlist_id, req.song)?;
    Ok(HttpResponse::Ok().json(playlist))
}

/// A missing secret code counts as an unknown user; the user is checked
/// before the ids.
pub async fn delete_song_from_playlist(
    query: web::Query<SongQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let secret_code = query.secret_code.as_deref().unwrap_or_default();
    state.store.authenticate(secret_code)?;
    let playlist_id = parse_id(query.playlist_id.as_deref(), "playlist")?;
    let song_id = parse_id(query.song_id.as_deref(), "song")?;
    state.store.delete_song(secret_code, &playlist_id, &song_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Only routed when `EXPOSE_SONG_DETAIL` is enabled.
pub async fn get_song_detail(
    query: web::Query<SongQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let secret_code = query.secret_code.as_deref().unwrap_or_default();
    state.store.authenticate(secret_code)?;
    let playlist_id = parse_id(query.playlist_id.as_deref(), "playlist")?;
    let song_id = parse_id(query.song_id.as_deref(), "song")?;
    let song = state.store.song_detail(secret_code, &playlist_id, &song_id)?;
    Ok(HttpResponse::Ok().json(song))
}
