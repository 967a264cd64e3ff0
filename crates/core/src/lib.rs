//! `estante-core` — wire model and pure view logic for the library catalog.
//!
//! This crate contains the **pure domain** types shared by the API client and
//! the frontend: the backend's exact JSON shapes (Portuguese field names on
//! the wire, idiomatic names in Rust), date conversion at the wire/display
//! boundaries, reservation lifecycle predicates and form validation.
//! No I/O lives here.

pub mod book;
pub mod dates;
pub mod error;
pub mod forms;
pub mod reservation;

pub use book::{Book, NewBook};
pub use error::FormError;
pub use forms::{BookDraft, ReservationDraft};
pub use reservation::{Reservation, ReservationRequest, ReservationStatus};
