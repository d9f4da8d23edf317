use actix_web::{web, HttpResponse};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::config::AppState;
use crate::error::{AppError, Result};
use crate::models::{SecretCodeRequest, User};

/// Raw entropy per secret code; encodes to 8 URL-safe characters.
pub const SECRET_CODE_BYTES: usize = 6;

pub fn generate_secret_code() -> String {
    let mut bytes = [0u8; SECRET_CODE_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Extracts the `secret_code` query parameter, rejecting absent or blank values.
pub fn require_secret_code(code: Option<&str>) -> Result<&str> {
    match code {
        Some(code) if !code.is_empty() => Ok(code),
        _ => Err(AppError::validation("Secret code is required")),
    }
}

/// Resolves a secret code sent in a JSON body. Unknown codes are reported as
/// 401 rather than 404 on these endpoints.
pub(crate) fn authenticate_body(
    req: &SecretCodeRequest,
    state: &AppState,
) -> Result<User> {
    state
        .store
        .authenticate(&req.secret_code)
        .map_err(|e| match e {
            AppError::NotFound(_) => {
                tracing::warn!("rejected login with unknown secret code");
                AppError::Unauthorized("Invalid secret code".to_string())
            }
            other => other,
        })
}

pub async fn login(
    req: web::Json<SecretCodeRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let user = authenticate_body(&req, &state)?;
    tracing::info!(user_id = %user.id, "user logged in");
    Ok(HttpResponse::Ok().json(user))
}
