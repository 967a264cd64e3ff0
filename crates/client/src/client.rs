//! The API client: one method per backend operation.
//!
//! Paths and JSON shapes are reproduced bit-for-bit from the backend's
//! contract; see `estante-core` for the wire types.

use serde::de::DeserializeOwned;

use estante_core::{Book, NewBook, Reservation, ReservationRequest};

use crate::error::{ApiError, Conflict};

/// Default backend base URL, overridable at client construction.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Thin wrapper around `reqwest` with the backend's base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Filters for `GET /livros/busca`. Empty fields are omitted from the query
/// string, matching the backend's optional parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookQuery {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl BookQuery {
    fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if !self.title.is_empty() {
            params.push(("titulo", self.title.as_str()));
        }
        if !self.author.is_empty() {
            params.push(("autor", self.author.as_str()));
        }
        if !self.genre.is_empty() {
            params.push(("genero", self.genre.as_str()));
        }
        params
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let resp = self.http.get(self.url("/livros")).send().await.map_err(transport)?;
        json(check(resp, None).await?).await
    }

    pub async fn search_books(&self, query: &BookQuery) -> Result<Vec<Book>, ApiError> {
        let resp = self
            .http
            .get(self.url("/livros/busca"))
            .query(&query.params())
            .send()
            .await
            .map_err(transport)?;
        json(check(resp, None).await?).await
    }

    pub async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/livros/{id}")))
            .send()
            .await
            .map_err(transport)?;
        json(check(resp, None).await?).await
    }

    pub async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        let resp = self
            .http
            .post(self.url("/livros"))
            .json(book)
            .send()
            .await
            .map_err(transport)?;
        json(check(resp, None).await?).await
    }

    pub async fn update_book(&self, book: &Book) -> Result<Book, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/livros/{}", book.id)))
            .json(book)
            .send()
            .await
            .map_err(transport)?;
        json(check(resp, None).await?).await
    }

    /// 409 means the book still has non-finalized reservations.
    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/livros/{id}")))
            .send()
            .await
            .map_err(transport)?;
        check(resp, Some(Conflict::BookHasActiveReservations)).await?;
        Ok(())
    }

    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        let resp = self
            .http
            .get(self.url("/livros/reservas"))
            .send()
            .await
            .map_err(transport)?;
        json(check(resp, None).await?).await
    }

    pub async fn get_reservation(&self, id: &str) -> Result<Reservation, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/livros/reservas/{id}")))
            .send()
            .await
            .map_err(transport)?;
        json(check(resp, None).await?).await
    }

    /// 409 means no copies remain for this book.
    pub async fn create_reservation(
        &self,
        book_id: &str,
        request: &ReservationRequest,
    ) -> Result<Reservation, ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/livros/{book_id}/reservar")))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        json(check(resp, Some(Conflict::NoCopiesAvailable)).await?).await
    }

    /// 409 means the reservation was already returned or cancelled.
    pub async fn return_reservation(&self, id: &str) -> Result<Reservation, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/livros/reservas/{id}/devolver")))
            .send()
            .await
            .map_err(transport)?;
        json(check(resp, Some(Conflict::ReservationAlreadyFinalized)).await?).await
    }

    /// 409 means the reservation was already returned or cancelled.
    pub async fn cancel_reservation(&self, id: &str) -> Result<Reservation, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/livros/reservas/{id}/cancelar")))
            .send()
            .await
            .map_err(transport)?;
        json(check(resp, Some(Conflict::ReservationAlreadyFinalized)).await?).await
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Map a response status: success passes through, 409 becomes the
/// operation's conflict (when one applies), anything else becomes a generic
/// failure carrying the body text.
async fn check(
    resp: reqwest::Response,
    conflict: Option<Conflict>,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::CONFLICT {
        if let Some(conflict) = conflict {
            tracing::debug!(%status, ?conflict, "backend reported a conflict");
            return Err(conflict.into());
        }
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(%status, "backend call failed");
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    resp.json().await.map_err(|err| ApiError::Decode(err.to_string()))
}
