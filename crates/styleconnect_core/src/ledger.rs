//! crates/styleconnect_core/src/ledger.rs
//!
//! The booking ledger: the signed-in user's append-only list of bookings, stored
//! inside that user's record under the `users` key.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::{BookingDescription, Catalog};
use crate::domain::{Booking, BookingDraft, BookingStatus, Identity, User};
use crate::payment::{PaymentDetails, PaymentError};
use crate::ports::{KeyValueStore, PortError};
use crate::records::{self, RecordLock};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("You must be logged in to book a designer")]
    AuthenticationRequired,
    #[error("Please select all category options")]
    MissingSelection,
    #[error("Designer '{0}' not found")]
    UnknownDesigner(String),
    #[error("No catalog entry for {category_id}/{subcategory_id}/{sub_subcategory_id}")]
    UnresolvedLeaf {
        category_id: String,
        subcategory_id: String,
        sub_subcategory_id: String,
    },
    #[error("Booking '{0}' not found")]
    NotFound(String),
    #[error("Booking '{id}' cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: BookingStatus,
        to: BookingStatus,
    },
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Port(#[from] PortError),
}

pub type BookingResult<T> = Result<T, BookingError>;

/// What the booking form submits: the designer, the three catalog selections and
/// the payment input. Empty selections are allowed here and rejected by `submit`.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub designer_id: String,
    pub category_id: String,
    pub subcategory_id: String,
    pub sub_subcategory_id: String,
    pub design_details: Option<String>,
    pub payment: PaymentDetails,
}

#[derive(Debug, Clone)]
pub struct DashboardEntry {
    pub booking: Booking,
    pub description: BookingDescription,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub identity: Identity,
    pub total_bookings: usize,
    pub bookings: Vec<DashboardEntry>,
}

#[derive(Clone)]
pub struct BookingLedger {
    store: Arc<dyn KeyValueStore>,
    catalog: Arc<Catalog>,
    lock: RecordLock,
    checkout_delay: Duration,
}

impl BookingLedger {
    pub fn new(store: Arc<dyn KeyValueStore>, catalog: Arc<Catalog>) -> Self {
        Self {
            store,
            catalog,
            lock: RecordLock::default(),
            checkout_delay: Duration::ZERO,
        }
    }

    /// Shares the partition's record lock with other services on the same store.
    pub fn with_lock(mut self, lock: RecordLock) -> Self {
        self.lock = lock;
        self
    }

    /// Pause applied by `submit` once the form has passed every check.
    pub fn with_checkout_delay(mut self, delay: Duration) -> Self {
        self.checkout_delay = delay;
        self
    }

    /// Loads all users and locates the signed-in one.
    async fn owner(&self) -> BookingResult<(Vec<User>, usize)> {
        let Some(identity) = records::load_identity(self.store.as_ref()).await? else {
            warn!("booking operation attempted without a signed-in user");
            return Err(BookingError::AuthenticationRequired);
        };
        let users = records::load_users(self.store.as_ref()).await?;
        let Some(index) = users.iter().position(|u| u.id == identity.id) else {
            warn!(user_id = %identity.id, "signed-in identity has no matching account");
            return Err(BookingError::AuthenticationRequired);
        };
        Ok((users, index))
    }

    fn check_references(&self, draft: &BookingDraft) -> BookingResult<()> {
        if self.catalog.designer_by_id(&draft.designer_id).is_none() {
            return Err(BookingError::UnknownDesigner(draft.designer_id.clone()));
        }
        if self
            .catalog
            .sub_subcategory_by_id(
                &draft.category_id,
                &draft.subcategory_id,
                &draft.sub_subcategory_id,
            )
            .is_none()
        {
            return Err(BookingError::UnresolvedLeaf {
                category_id: draft.category_id.clone(),
                subcategory_id: draft.subcategory_id.clone(),
                sub_subcategory_id: draft.sub_subcategory_id.clone(),
            });
        }
        Ok(())
    }

    /// Appends a new pending booking for the signed-in user.
    ///
    /// Identical drafts produce distinct bookings; there is no deduplication.
    pub async fn add_booking(&self, draft: BookingDraft) -> BookingResult<Booking> {
        let _guard = self.lock.lock().await;
        let (mut users, index) = self.owner().await?;
        self.check_references(&draft)?;

        let user = &mut users[index];
        let booking = Booking {
            id: format!("booking-{}", Uuid::new_v4()),
            user_id: user.id.clone(),
            designer_id: draft.designer_id,
            category_id: draft.category_id,
            subcategory_id: draft.subcategory_id,
            sub_subcategory_id: draft.sub_subcategory_id,
            design_details: draft.design_details,
            status: BookingStatus::Pending,
            date: Utc::now(),
            payment_method: draft.payment_method,
        };
        user.bookings.push(booking.clone());

        records::save_users(self.store.as_ref(), &users).await?;
        info!(booking_id = %booking.id, designer_id = %booking.designer_id, "booking created");
        Ok(booking)
    }

    /// Validates the booking form and records the booking.
    ///
    /// Invalid forms fail straight away; the checkout delay only applies to a
    /// booking that is about to be recorded.
    pub async fn submit(&self, request: BookingRequest) -> BookingResult<Booking> {
        if [
            &request.category_id,
            &request.subcategory_id,
            &request.sub_subcategory_id,
        ]
        .iter()
        .any(|id| id.is_empty())
        {
            return Err(BookingError::MissingSelection);
        }
        request.payment.validate()?;

        let draft = BookingDraft {
            designer_id: request.designer_id,
            category_id: request.category_id,
            subcategory_id: request.subcategory_id,
            sub_subcategory_id: request.sub_subcategory_id,
            design_details: request.design_details,
            payment_method: request.payment.method,
        };
        self.check_references(&draft)?;
        if records::load_identity(self.store.as_ref()).await?.is_none() {
            warn!("booking submitted without a signed-in user");
            return Err(BookingError::AuthenticationRequired);
        }

        if !self.checkout_delay.is_zero() {
            tokio::time::sleep(self.checkout_delay).await;
        }
        self.add_booking(draft).await
    }

    /// The signed-in user's bookings, oldest first.
    pub async fn bookings(&self) -> BookingResult<Vec<Booking>> {
        let (mut users, index) = self.owner().await?;
        Ok(std::mem::take(&mut users[index].bookings))
    }

    pub async fn dashboard(&self) -> BookingResult<Dashboard> {
        let (users, index) = self.owner().await?;
        let user = &users[index];
        let bookings: Vec<DashboardEntry> = user
            .bookings
            .iter()
            .map(|b| DashboardEntry {
                booking: b.clone(),
                description: self.catalog.describe_booking(b),
            })
            .collect();
        Ok(Dashboard {
            identity: user.identity(),
            total_bookings: bookings.len(),
            bookings,
        })
    }

    pub async fn cancel_booking(&self, booking_id: &str) -> BookingResult<Booking> {
        self.set_status(booking_id, BookingStatus::Cancelled).await
    }

    pub async fn complete_booking(&self, booking_id: &str) -> BookingResult<Booking> {
        self.set_status(booking_id, BookingStatus::Completed).await
    }

    async fn set_status(&self, booking_id: &str, to: BookingStatus) -> BookingResult<Booking> {
        let _guard = self.lock.lock().await;
        let (mut users, index) = self.owner().await?;
        let booking = users[index]
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))?;

        let from = booking.status;
        booking.status = from
            .transition(to)
            .ok_or_else(|| BookingError::InvalidTransition {
                id: booking_id.to_string(),
                from,
                to,
            })?;
        let updated = booking.clone();

        records::save_users(self.store.as_ref(), &users).await?;
        info!(booking_id, status = %updated.status, "booking status changed");
        Ok(updated)
    }
}
