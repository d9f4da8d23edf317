use actix_web::{web, HttpResponse};

use crate::auth::authenticate_body;
use crate::config::AppState;
use crate::error::Result;
use crate::models::{RegisterRequest, SecretCodeRequest};

/// Creates a user. The response carries the freshly issued secret code; this
/// is the only place it is handed out.
pub async fn register(
    req: web::Json<RegisterRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let user = state.store.register(req.display_name(), &req.email)?;
    Ok(HttpResponse::Created().json(user))
}

pub async fn view_profile(
    req: web::Json<SecretCodeRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let user = authenticate_body(&req, &state)?;
    tracing::debug!(user_id = %user.id, playlists = user.playlists.len(), "viewing profile");
    Ok(HttpResponse::Ok().json(user.playlists))
}
