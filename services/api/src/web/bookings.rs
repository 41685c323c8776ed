//! services/api/src/web/bookings.rs
//!
//! Booking endpoints for the signed-in user: checkout, history, status changes and
//! the dashboard summary.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use styleconnect_core::{
    Booking, BookingError, BookingRequest, CardDetails, PaymentDetails, PaymentMethod,
};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::web::auth::AuthResponse;
use crate::web::state::ClientContext;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardInput {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub cvc: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    /// "Credit Card" or "PayPal".
    pub method: String,
    #[serde(default)]
    pub card: Option<CardInput>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub designer_id: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub subcategory_id: String,
    #[serde(default)]
    pub sub_subcategory_id: String,
    #[serde(default)]
    pub design_details: Option<String>,
    pub payment: PaymentInput,
}

impl CreateBookingRequest {
    fn into_request(self) -> Result<BookingRequest, (StatusCode, String)> {
        let method = self
            .payment
            .method
            .parse::<PaymentMethod>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e))?;
        let card = self.payment.card.map(|c| CardDetails {
            number: c.number,
            name: c.name,
            expiry: c.expiry,
            cvc: c.cvc,
        });
        Ok(BookingRequest {
            designer_id: self.designer_id,
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            sub_subcategory_id: self.sub_subcategory_id,
            design_details: self.design_details,
            payment: PaymentDetails { method, card },
        })
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub user_id: String,
    pub designer_id: String,
    pub category_id: String,
    pub subcategory_id: String,
    pub sub_subcategory_id: String,
    pub design_details: Option<String>,
    /// One of pending, completed, cancelled.
    pub status: String,
    pub date: DateTime<Utc>,
    pub payment_method: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            designer_id: b.designer_id,
            category_id: b.category_id,
            subcategory_id: b.subcategory_id,
            sub_subcategory_id: b.sub_subcategory_id,
            design_details: b.design_details,
            status: b.status.to_string(),
            date: b.date,
            payment_method: b.payment_method.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardBooking {
    #[serde(flatten)]
    pub booking: BookingResponse,
    pub designer_name: Option<String>,
    pub category_name: Option<String>,
    pub subcategory_name: Option<String>,
    pub sub_subcategory_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub user: AuthResponse,
    pub total_bookings: usize,
    pub bookings: Vec<DashboardBooking>,
}

/// Maps ledger failures onto HTTP responses.
pub fn booking_error(e: BookingError) -> (StatusCode, String) {
    match e {
        BookingError::AuthenticationRequired => (StatusCode::UNAUTHORIZED, e.to_string()),
        BookingError::MissingSelection | BookingError::Payment(_) => {
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        BookingError::UnknownDesigner(_)
        | BookingError::UnresolvedLeaf { .. }
        | BookingError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        BookingError::InvalidTransition { .. } => (StatusCode::CONFLICT, e.to_string()),
        BookingError::Port(ref port) => {
            error!("Booking storage failure: {:?}", port);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to access booking storage".to_string(),
            )
        }
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /bookings - Check out a booking with the selected designer
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking recorded as pending", body = BookingResponse),
        (status = 400, description = "Missing selection or malformed payment details"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Designer or catalog entry not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_booking_handler(
    Extension(client): Extension<ClientContext>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let request = req.into_request()?;

    let booking = client.ledger.submit(request).await.map_err(|e| {
        warn!(client_id = %client.client_id, "booking rejected: {}", e);
        booking_error(e)
    })?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

/// GET /bookings - The signed-in user's bookings, oldest first
#[utoipa::path(
    get,
    path = "/bookings",
    responses(
        (status = 200, description = "Booking history", body = [BookingResponse]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_bookings_handler(
    Extension(client): Extension<ClientContext>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let bookings = client.ledger.bookings().await.map_err(booking_error)?;
    let response: Vec<BookingResponse> = bookings.into_iter().map(BookingResponse::from).collect();
    Ok(Json(response))
}

/// POST /bookings/{booking_id}/cancel - Cancel a pending booking
#[utoipa::path(
    post,
    path = "/bookings/{booking_id}/cancel",
    params(("booking_id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is already completed or cancelled")
    )
)]
pub async fn cancel_booking_handler(
    Extension(client): Extension<ClientContext>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let booking = client
        .ledger
        .cancel_booking(&booking_id)
        .await
        .map_err(booking_error)?;
    Ok(Json(BookingResponse::from(booking)))
}

/// POST /bookings/{booking_id}/complete - Mark a pending booking as completed
#[utoipa::path(
    post,
    path = "/bookings/{booking_id}/complete",
    params(("booking_id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking completed", body = BookingResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is already completed or cancelled")
    )
)]
pub async fn complete_booking_handler(
    Extension(client): Extension<ClientContext>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let booking = client
        .ledger
        .complete_booking(&booking_id)
        .await
        .map_err(booking_error)?;
    Ok(Json(BookingResponse::from(booking)))
}

/// GET /dashboard - Greeting, booking count and history with catalog names
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardResponse),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn dashboard_handler(
    Extension(client): Extension<ClientContext>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let dashboard = client.ledger.dashboard().await.map_err(booking_error)?;
    info!(user_id = %dashboard.identity.id, total = dashboard.total_bookings, "dashboard served");

    Ok(Json(DashboardResponse {
        user: AuthResponse::from(dashboard.identity),
        total_bookings: dashboard.total_bookings,
        bookings: dashboard
            .bookings
            .into_iter()
            .map(|entry| DashboardBooking {
                booking: BookingResponse::from(entry.booking),
                designer_name: entry.description.designer_name,
                category_name: entry.description.category_name,
                subcategory_name: entry.description.subcategory_name,
                sub_subcategory_name: entry.description.sub_subcategory_name,
            })
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleconnect_core::{BookingStatus, PaymentError, PortError};

    #[test]
    fn booking_errors_map_to_status_codes() {
        assert_eq!(
            booking_error(BookingError::AuthenticationRequired).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            booking_error(BookingError::Payment(PaymentError::Cvc)).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            booking_error(BookingError::NotFound("booking-x".into())).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            booking_error(BookingError::InvalidTransition {
                id: "booking-x".into(),
                from: BookingStatus::Cancelled,
                to: BookingStatus::Completed,
            })
            .0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            booking_error(BookingError::Port(PortError::Unauthorized)).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unknown_payment_method_is_a_bad_request() {
        let req = CreateBookingRequest {
            designer_id: "designer-1".into(),
            category_id: "category-1".into(),
            subcategory_id: "subcategory-1-1".into(),
            sub_subcategory_id: "subsubcategory-1-1-1".into(),
            design_details: None,
            payment: PaymentInput {
                method: "Bitcoin".into(),
                card: None,
            },
        };
        let err = req.into_request().unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn payment_input_becomes_core_request() {
        let req: CreateBookingRequest = serde_json::from_value(serde_json::json!({
            "designerId": "designer-2",
            "categoryId": "category-1",
            "subcategoryId": "subcategory-1-1",
            "subSubcategoryId": "subsubcategory-1-1-1",
            "payment": { "method": "Credit Card", "card": { "number": "4242 4242 4242 4242", "name": "Jane", "expiry": "12/27", "cvc": "123" } }
        }))
        .unwrap();
        let request = req.into_request().unwrap();
        assert_eq!(request.payment.method, PaymentMethod::CreditCard);
        assert!(request.payment.validate().is_ok());
    }
}
