//! Form validation errors.

use thiserror::Error;

/// A form failed its presence checks; no request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("please fill in the required field: {0}")]
    MissingField(&'static str),

    #[error("please select a book first")]
    NoBookSelected,

    #[error("please select a reservation first")]
    NoReservationSelected,

    #[error("quantity must be a whole number")]
    InvalidQuantity,

    #[error("the publication date is not a valid date")]
    InvalidDate,
}
