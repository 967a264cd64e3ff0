//! Reservation records and the client-side partitions over them.
//!
//! The canonical lifecycle lives in the backend; the client only classifies
//! what it is given: a reservation is active until the backend flags it as
//! returned or cancelled, after which it is immutable and moves to history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A hold placed by a user against one copy of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    #[serde(rename = "livroId")]
    pub book_id: String,
    #[serde(rename = "usuarioId", default)]
    pub user_id: Option<String>,
    #[serde(rename = "nomeUsuario")]
    pub user_name: String,
    #[serde(rename = "dataReserva")]
    pub reserved_at: DateTime<Utc>,
    #[serde(rename = "dataPrevistaDevolucao")]
    pub expected_return_at: DateTime<Utc>,
    #[serde(rename = "dataDevolucao", default)]
    pub returned_at: Option<DateTime<Utc>>,
    #[serde(rename = "dataCancelamento", default)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(rename = "devolvida")]
    pub returned: bool,
    #[serde(rename = "cancelada")]
    pub cancelled: bool,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        !self.returned && !self.cancelled
    }

    pub fn is_finalized(&self) -> bool {
        self.returned || self.cancelled
    }

    /// Display status. Returned wins if both flags are somehow set; the
    /// backend never produces that combination, but display must stay total.
    pub fn status(&self) -> ReservationStatus {
        if self.returned {
            ReservationStatus::Returned
        } else if self.cancelled {
            ReservationStatus::Cancelled
        } else {
            ReservationStatus::Active
        }
    }

    /// Timestamp of the terminating event, if any.
    pub fn finalized_at(&self) -> Option<DateTime<Utc>> {
        match self.status() {
            ReservationStatus::Returned => self.returned_at,
            ReservationStatus::Cancelled => self.cancelled_at,
            ReservationStatus::Active => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Active,
    Returned,
    Cancelled,
}

impl ReservationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Active => "Active",
            ReservationStatus::Returned => "Returned",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }

    /// CSS modifier for history rows.
    pub fn css_class(self) -> &'static str {
        match self {
            ReservationStatus::Active => "",
            ReservationStatus::Returned => "returned",
            ReservationStatus::Cancelled => "canceled",
        }
    }
}

/// Body of `POST /livros/{id}/reservar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// Reservations still awaiting return or cancellation.
pub fn active(items: &[Reservation]) -> Vec<Reservation> {
    items.iter().filter(|r| r.is_active()).cloned().collect()
}

/// Finalized reservations, for the history view.
pub fn history(items: &[Reservation]) -> Vec<Reservation> {
    items.iter().filter(|r| r.is_finalized()).cloned().collect()
}

/// Active reservations whose user name contains `needle`, case-insensitive.
/// Runs entirely client-side; an empty needle matches every active item.
pub fn search_active_by_user(items: &[Reservation], needle: &str) -> Vec<Reservation> {
    let needle = needle.to_lowercase();
    items
        .iter()
        .filter(|r| r.is_active() && r.user_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
