use actix_web::{web, HttpResponse};

use crate::auth::require_secret_code;
use crate::config::AppState;
use crate::error::{AppError, Result};
use crate::models::{CreatePlaylistRequest, PlaylistQuery, SecretCodeQuery};
use crate::utils::parse_id;

/// The owner is resolved before the body is parsed, so an unknown secret code
/// is a 404 even when the body is malformed.
pub async fn create_playlist(
    query: web::Query<SecretCodeQuery>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let secret_code = require_secret_code(query.secret_code.as_deref())?;
    state.store.authenticate(secret_code)?;

    let req: CreatePlaylistRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::validation("Invalid JSON input"))?;
    let playlist = state.store.create_playlist(secret_code, &req.name)?;
    Ok(HttpResponse::Created().json(playlist))
}

pub async fn get_all_songs_of_playlist(
    path: web::Path<String>,
    query: web::Query<SecretCodeQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let secret_code = require_secret_code(query.secret_code.as_deref())?;
    let playlist_id = parse_id(Some(path.as_str()), "playlist")?;
    let songs = state.store.list_songs(secret_code, &playlist_id)?;
    Ok(HttpResponse::Ok().json(songs))
}

pub async fn delete_playlist(
    query: web::Query<PlaylistQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let secret_code = query.secret_code.as_deref().unwrap_or_default();
    state.store.authenticate(secret_code)?;
    let playlist_id = parse_id(query.playlist_id.as_deref(), "playlist")?;
    state.store.delete_playlist(secret_code, &playlist_id)?;
    Ok(HttpResponse::NoContent().finish())
}
