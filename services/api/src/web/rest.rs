//! services/api/src/web/rest.rs
//!
//! Contains the public REST handlers (health, navigation, trending) and the master
//! definition for the OpenAPI specification.

use crate::web::{auth, bookings, catalog, state::{AppState, ClientContext}};
use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use std::sync::Arc;
use styleconnect_core::{navigate, Trending};
use tracing::error;
use utoipa::{IntoParams, OpenApi};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        navigate_handler,
        trending_handler,
        auth::signup_handler,
        auth::login_handler,
        auth::logout_handler,
        auth::me_handler,
        catalog::list_categories,
        catalog::get_category,
        catalog::get_subcategory,
        catalog::list_leaf_designers,
        catalog::get_designer,
        bookings::create_booking_handler,
        bookings::list_bookings_handler,
        bookings::cancel_booking_handler,
        bookings::complete_booking_handler,
        bookings::dashboard_handler,
    ),
    components(
        schemas(
            auth::SignupRequest,
            auth::LoginRequest,
            auth::AuthResponse,
            catalog::CategorySummary,
            catalog::CategoryDetail,
            catalog::SubcategorySummary,
            catalog::SubcategoryDetail,
            catalog::LeafSummary,
            catalog::LeafDesigners,
            catalog::DesignerResponse,
            bookings::CardInput,
            bookings::PaymentInput,
            bookings::CreateBookingRequest,
            bookings::BookingResponse,
            bookings::DashboardBooking,
            bookings::DashboardResponse,
        )
    ),
    tags(
        (name = "StyleConnect API", description = "Accounts, catalog browsing and designer bookings.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Query Types
//=========================================================================================

#[derive(Deserialize, IntoParams)]
pub struct NavigateQuery {
    /// Client-side path such as `/categories/category-1`.
    pub path: String,
}

//=========================================================================================
// Public Handlers
//=========================================================================================

/// GET /health - Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_handler() -> &'static str {
    "ok"
}

/// GET /navigate - Decide what a client-side path renders for the caller.
///
/// Answers with `render`, `redirect` (to `/login` for protected screens) or
/// `notFound` with a link back.
#[utoipa::path(
    get,
    path = "/navigate",
    params(NavigateQuery),
    responses(
        (status = 200, description = "Navigation outcome"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn navigate_handler(
    State(state): State<Arc<AppState>>,
    Extension(client): Extension<ClientContext>,
    Query(query): Query<NavigateQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let identity = client.session.current_identity().await.map_err(|e| {
        error!("Failed to read session identity: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to read session".to_string(),
        )
    })?;

    Ok(Json(navigate(&query.path, identity.as_ref(), &state.catalog)))
}

/// GET /trending - Featured designers, latest projects and growing categories
#[utoipa::path(
    get,
    path = "/trending",
    responses((status = 200, description = "Trending listings"))
)]
pub async fn trending_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(Trending::resolve(&state.catalog))
}
