//! Batch resolution of reservation → book references.
//!
//! Reservation rows only need the book title. Instead of one
//! `GET /livros/{id}` per row, the whole catalog is fetched once per render
//! cycle and rows resolve against this local table.

use std::collections::HashMap;

use estante_core::{Book, Reservation};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Book lookup table keyed by id, valid for one render cycle.
#[derive(Debug, Default, Clone)]
pub struct BookDirectory {
    by_id: HashMap<String, Book>,
}

impl BookDirectory {
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let by_id = books
            .into_iter()
            .map(|book| (book.id.clone(), book))
            .collect();
        Self { by_id }
    }

    /// Build the table with a single catalog fetch.
    pub async fn load(client: &ApiClient) -> Result<Self, ApiError> {
        Ok(Self::from_books(client.list_books().await?))
    }

    pub fn get(&self, book_id: &str) -> Option<&Book> {
        self.by_id.get(book_id)
    }

    pub fn title(&self, book_id: &str) -> Option<&str> {
        self.by_id.get(book_id).map(|book| book.title.as_str())
    }

    /// Pair each reservation with its book title, preserving order.
    ///
    /// A reservation whose book is unknown is logged and dropped; the rest
    /// of the render proceeds rather than failing the whole list.
    pub fn resolve<'a>(
        &'a self,
        reservations: &'a [Reservation],
    ) -> Vec<(&'a Reservation, &'a str)> {
        reservations
            .iter()
            .filter_map(|reservation| match self.title(&reservation.book_id) {
                Some(title) => Some((reservation, title)),
                None => {
                    tracing::warn!(
                        reservation_id = %reservation.id,
                        book_id = %reservation.book_id,
                        "reservation references an unknown book; skipping row"
                    );
                    None
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
