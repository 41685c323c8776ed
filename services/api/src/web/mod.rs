pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod middleware;
pub mod rest;
pub mod state;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use middleware::{attach_client, require_auth};
pub use state::{AppState, ClientContext};

/// Builds the application router.
///
/// Every request gets a client partition; the protected group also needs a
/// signed-in identity in that partition.
pub fn build_router(state: Arc<AppState>) -> Router {
    let public = Router::new()
        .route("/health", get(rest::health_handler))
        .route("/navigate", get(rest::navigate_handler))
        .route("/trending", get(rest::trending_handler))
        .route("/auth/signup", post(auth::signup_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler));

    let protected = Router::new()
        .route("/auth/me", get(auth::me_handler))
        .route("/dashboard", get(bookings::dashboard_handler))
        .route("/catalog/categories", get(catalog::list_categories))
        .route("/catalog/categories/{category_id}", get(catalog::get_category))
        .route(
            "/catalog/categories/{category_id}/{subcategory_id}",
            get(catalog::get_subcategory),
        )
        .route(
            "/catalog/categories/{category_id}/{subcategory_id}/{sub_subcategory_id}",
            get(catalog::list_leaf_designers),
        )
        .route("/designers/{designer_id}", get(catalog::get_designer))
        .route(
            "/bookings",
            get(bookings::list_bookings_handler).post(bookings::create_booking_handler),
        )
        .route(
            "/bookings/{booking_id}/cancel",
            post(bookings::cancel_booking_handler),
        )
        .route(
            "/bookings/{booking_id}/complete",
            post(bookings::complete_booking_handler),
        )
        .route_layer(from_fn(require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(from_fn_with_state(state.clone(), attach_client))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
