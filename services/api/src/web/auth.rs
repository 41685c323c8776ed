//! services/api/src/web/auth.rs
//!
//! Authentication endpoints for user signup, login, and logout.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use styleconnect_core::{Identity, SessionError};
use tracing::error;
use utoipa::ToSchema;

use crate::web::state::ClientContext;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct AuthResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<Identity> for AuthResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
        }
    }
}

/// Maps session failures onto HTTP responses.
pub fn session_error(e: SessionError) -> (StatusCode, String) {
    match e {
        SessionError::InvalidCredentials => (StatusCode::UNAUTHORIZED, e.to_string()),
        SessionError::DuplicateEmail => (StatusCode::CONFLICT, e.to_string()),
        SessionError::MissingField(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        SessionError::Port(ref port) => {
            error!("Session storage failure: {:?}", port);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to access account storage".to_string(),
            )
        }
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /auth/signup - Create a new account and sign it in
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created successfully", body = AuthResponse),
        (status = 400, description = "A required field is missing"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn signup_handler(
    Extension(client): Extension<ClientContext>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let identity = client
        .session
        .signup(&req.name, &req.email, &req.password)
        .await
        .map_err(session_error)?;

    Ok((StatusCode::CREATED, Json(AuthResponse::from(identity))))
}

/// POST /auth/login - Login with existing account
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login_handler(
    Extension(client): Extension<ClientContext>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let identity = client
        .session
        .login(&req.email, &req.password)
        .await
        .map_err(session_error)?;

    Ok((StatusCode::OK, Json(AuthResponse::from(identity))))
}

/// POST /auth/logout - Clear the signed-in identity
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 204, description = "Logout successful"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn logout_handler(
    Extension(client): Extension<ClientContext>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    client.session.logout().await.map_err(session_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/me - The signed-in identity
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current identity", body = AuthResponse),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn me_handler(Extension(identity): Extension<Identity>) -> Json<AuthResponse> {
    Json(AuthResponse::from(identity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleconnect_core::PortError;

    #[test]
    fn session_errors_map_to_status_codes() {
        assert_eq!(
            session_error(SessionError::InvalidCredentials).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            session_error(SessionError::DuplicateEmail).0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            session_error(SessionError::MissingField("name")).0,
            StatusCode::BAD_REQUEST
        );
        let (status, body) = session_error(SessionError::Port(PortError::Unexpected(
            "disk full".into(),
        )));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("disk full"));
    }
}
