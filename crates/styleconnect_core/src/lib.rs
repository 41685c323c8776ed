pub mod catalog;
pub mod domain;
pub mod ledger;
pub mod payment;
pub mod ports;
pub mod records;
pub mod routes;
pub mod session;
pub mod trending;

#[cfg(test)]
mod testing;

pub use catalog::{BookingDescription, Catalog, DanglingDesigner};
pub use domain::{
    Booking, BookingDraft, BookingStatus, Category, Designer, Identity, PaymentMethod,
    SubSubcategory, Subcategory, User,
};
pub use ledger::{BookingError, BookingLedger, BookingRequest, Dashboard};
pub use payment::{CardDetails, PaymentDetails, PaymentError};
pub use ports::{KeyValueStore, PortError, PortResult};
pub use records::RecordLock;
pub use routes::{navigate, Navigation, Route};
pub use session::{SessionError, SessionStore};
pub use trending::Trending;
