//! Client-side view of failed backend calls.

use thiserror::Error;

/// Business-rule violation the backend reports as HTTP 409.
///
/// The backend attaches no structured body to a 409, so the meaning is
/// inferred from which operation was called. Each message is user-facing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    #[error("this book cannot be removed because it has active reservations")]
    BookHasActiveReservations,

    #[error("no copies of this book are available to reserve")]
    NoCopiesAvailable,

    #[error("this reservation was already returned or cancelled")]
    ReservationAlreadyFinalized,
}

/// Anything that can go wrong between form submit and rendered response.
/// None of these are retried; all are surfaced to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (refused connection, DNS, aborted fetch).
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx, non-409 response. The body text is carried verbatim for the
    /// notification.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// HTTP 409, mapped to the business rule of the calling operation.
    #[error("{0}")]
    Conflict(#[from] Conflict),

    /// The response body was not the JSON shape we expected.
    #[error("invalid response payload: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_messages_are_operation_specific() {
        assert!(Conflict::BookHasActiveReservations
            .to_string()
            .contains("active reservations"));
        assert!(Conflict::NoCopiesAvailable.to_string().contains("no copies"));
        assert!(Conflict::ReservationAlreadyFinalized
            .to_string()
            .contains("already returned or cancelled"));
    }

    #[test]
    fn status_error_carries_body_text() {
        let err = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "server returned 500: boom");
        assert!(!err.is_conflict());
        assert!(ApiError::from(Conflict::NoCopiesAvailable).is_conflict());
    }
}
