//! crates/styleconnect_core/src/domain.rs
//!
//! Defines the core data structures for the marketplace.
//! Field names serialize in camelCase so the persisted JSON layout stays stable.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//=========================================================================================
// Catalog
//=========================================================================================

/// A designer available for booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designer {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub rating: f32,
    pub specialties: Vec<String>,
    pub description: String,
    pub price: u32,
    pub portfolio: Vec<String>,
}

/// Top level of the taxonomy. Owns its subcategories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub subcategories: Vec<Subcategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sub_subcategories: Vec<SubSubcategory>,
}

/// A leaf of the taxonomy. Designers are referenced by id, not embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubSubcategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub designer_ids: Vec<String>,
}

//=========================================================================================
// Accounts
//=========================================================================================

/// A registered account as persisted under the `users` key.
///
/// The password is stored as entered; there is no hashing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl User {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The redacted projection of a `User` that represents the active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
}

//=========================================================================================
// Bookings
//=========================================================================================

/// Lifecycle of a booking. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }

    /// Returns the new status if `self -> to` is an allowed transition.
    pub fn transition(self, to: BookingStatus) -> Option<BookingStatus> {
        match (self, to) {
            (BookingStatus::Pending, BookingStatus::Completed)
            | (BookingStatus::Pending, BookingStatus::Cancelled) => Some(to),
            _ => None,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card", alias = "credit-card")]
    CreditCard,
    #[serde(rename = "PayPal", alias = "paypal")]
    PayPal,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CreditCard => f.write_str("Credit Card"),
            PaymentMethod::PayPal => f.write_str("PayPal"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Credit Card" | "credit-card" => Ok(PaymentMethod::CreditCard),
            "PayPal" | "paypal" => Ok(PaymentMethod::PayPal),
            other => Err(format!("unknown payment method '{}'", other)),
        }
    }
}

/// A booking as stored inside its owner's `User` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub designer_id: String,
    pub category_id: String,
    pub subcategory_id: String,
    pub sub_subcategory_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_details: Option<String>,
    pub status: BookingStatus,
    pub date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
}

/// The caller-supplied part of a booking; id, owner, status and date are filled in
/// by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub designer_id: String,
    pub category_id: String,
    pub subcategory_id: String,
    pub sub_subcategory_id: String,
    #[serde(default)]
    pub design_details: Option<String>,
    pub payment_method: PaymentMethod,
}
