//! services/api/src/web/middleware.rs
//!
//! Middleware that resolves the calling client and protects signed-in routes.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use crate::web::state::{AppState, ClientContext};

/// Name of the cookie that identifies a client's storage partition.
pub const CLIENT_COOKIE: &str = "client";

const CLIENT_COOKIE_MAX_AGE: i64 = 60 * 60 * 24 * 365;

/// Reads a cookie value from the request headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|c| {
            let (k, v) = c.trim().split_once('=')?;
            (k == name).then_some(v)
        })
}

/// Attaches a `ClientContext` to every request.
///
/// Requests without a usable client cookie get a fresh partition, and the cookie is
/// set on the way out.
pub async fn attach_client(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    // 1. Reuse the caller's partition if the cookie holds a valid id
    let existing = cookie_value(req.headers(), CLIENT_COOKIE)
        .and_then(|v| Uuid::parse_str(v).ok())
        .map(|id| id.to_string());
    let is_new = existing.is_none();
    let client_id = existing.unwrap_or_else(|| Uuid::new_v4().to_string());

    // 2. Expose the client's services to handlers
    req.extensions_mut().insert(state.client(&client_id));
    let mut response = next.run(req).await;

    // 3. Hand out the cookie for new partitions
    if is_new {
        debug!(%client_id, "assigned new client partition");
        let cookie = format!(
            "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
            CLIENT_COOKIE, client_id, CLIENT_COOKIE_MAX_AGE
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => error!("Failed to build client cookie: {:?}", e),
        }
    }
    response
}

/// Middleware that requires a signed-in identity in the client's partition.
///
/// If present, inserts the `Identity` into request extensions for handlers to use.
/// Otherwise returns 401 Unauthorized, the API form of the redirect to login.
pub async fn require_auth(mut req: Request, next: Next) -> Result<Response, StatusCode> {
    let client = req
        .extensions()
        .get::<ClientContext>()
        .cloned()
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let identity = client
        .session
        .current_identity()
        .await
        .map_err(|e| {
            error!("Failed to read session identity: {:?}", e);
            StatusCode::UNAUTHORIZED
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_several() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; client=abc-123; other=x"),
        );
        assert_eq!(cookie_value(&headers, CLIENT_COOKIE), Some("abc-123"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn prefix_of_another_cookie_name_does_not_match() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("client_old=1"));
        assert_eq!(cookie_value(&headers, CLIENT_COOKIE), None);
    }
}
