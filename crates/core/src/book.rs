//! Catalog entries as the backend serves them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::wire_date;

/// A book record. Field renames pin the backend's wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "publicacao", with = "wire_date")]
    pub publication: NaiveDate,
    #[serde(rename = "quantidadeDisponivel")]
    pub available_count: i32,
}

impl Book {
    /// A book is offered in the reserve dropdown only while copies remain.
    pub fn is_reservable(&self) -> bool {
        self.available_count > 0
    }

    /// "Title - Author" label used by the edit and delete selects.
    pub fn select_label(&self) -> String {
        format!("{} - {}", self.title, self.author)
    }

    /// Reserve dropdown label, including the remaining copy count.
    pub fn reserve_label(&self) -> String {
        format!(
            "{} - {} ({} available)",
            self.title, self.author, self.available_count
        )
    }
}

/// Create payload; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "publicacao", with = "wire_date")]
    pub publication: NaiveDate,
    #[serde(rename = "quantidadeDisponivel")]
    pub available_count: i32,
}

impl NewBook {
    /// Attach a server-assigned (or selected) id, yielding a full record.
    /// Used by the edit form, which PUTs the whole book back.
    pub fn with_id(self, id: impl Into<String>) -> Book {
        Book {
            id: id.into(),
            title: self.title,
            author: self.author,
            genre: self.genre,
            publication: self.publication,
            available_count: self.available_count,
        }
    }
}
