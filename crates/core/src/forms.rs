//! Raw form field values and their presence checks.
//!
//! Validation is intentionally minimal: required fields must be non-empty,
//! the quantity must parse as an integer and the date input must carry a
//! `yyyy-MM-dd` value. Everything else is the backend's business.

use chrono::NaiveDate;

use crate::book::NewBook;
use crate::dates::WIRE_DATE_FORMAT;
use crate::error::FormError;
use crate::reservation::ReservationRequest;

/// Field values of the create/edit book forms, as typed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// `yyyy-MM-dd`, the value a date input produces.
    pub publication: String,
    pub quantity: String,
}

impl BookDraft {
    pub fn validate(&self) -> Result<NewBook, FormError> {
        let title = required("title", &self.title)?;
        let author = required("author", &self.author)?;
        let genre = required("genre", &self.genre)?;
        if self.publication.is_empty() {
            return Err(FormError::MissingField("publication date"));
        }
        let publication = NaiveDate::parse_from_str(&self.publication, WIRE_DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate)?;
        let available_count = self
            .quantity
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidQuantity)?;

        Ok(NewBook {
            title,
            author,
            genre,
            publication,
            available_count,
        })
    }
}

/// Field values of the reserve form, as typed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    /// Selected book id; empty when nothing is selected.
    pub book_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ReservationDraft {
    /// Book selection and user name are required; contact fields pass
    /// through as typed.
    pub fn validate(&self) -> Result<(String, ReservationRequest), FormError> {
        if self.book_id.is_empty() {
            return Err(FormError::NoBookSelected);
        }
        let name = required("user name", &self.name)?;
        let request = ReservationRequest {
            name,
            email: self.email.clone(),
            phone: self.phone.clone(),
        };
        Ok((self.book_id.clone(), request))
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}
