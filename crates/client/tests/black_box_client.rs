//! Black-box tests: the real client against an in-memory replica of the
//! library backend (same routes, same conflict rules, same wire shapes).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{Duration, NaiveDate, Utc};

use estante_client::{ApiClient, ApiError, BookDirectory, Conflict};
use estante_core::{reservation, Book, NewBook, Reservation, ReservationRequest};

#[derive(Default)]
struct Library {
    books: Vec<Book>,
    reservations: Vec<Reservation>,
    next_id: u64,
}

impl Library {
    fn assign_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    fn active_count(&self, book_id: &str) -> usize {
        self.reservations
            .iter()
            .filter(|r| r.book_id == book_id && r.is_active())
            .count()
    }
}

type Shared = Arc<Mutex<Library>>;

fn router(state: Shared) -> Router {
    Router::new()
        .route("/livros", get(list_books).post(create_book))
        .route("/livros/busca", get(search_books))
        .route("/livros/reservas", get(list_reservations))
        .route("/livros/reservas/:id", get(get_reservation))
        .route("/livros/reservas/:id/devolver", put(return_reservation))
        .route("/livros/reservas/:id/cancelar", put(cancel_reservation))
        .route(
            "/livros/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/livros/:id/reservar", post(reserve_book))
        .with_state(state)
}

async fn list_books(State(state): State<Shared>) -> Json<Vec<Book>> {
    Json(state.lock().unwrap().books.clone())
}

async fn search_books(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Book>> {
    let contains = |haystack: &str, key: &str| match params.get(key) {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    };
    let books = state
        .lock()
        .unwrap()
        .books
        .iter()
        .filter(|b| {
            contains(&b.title, "titulo") && contains(&b.author, "autor") && contains(&b.genre, "genero")
        })
        .cloned()
        .collect();
    Json(books)
}

async fn get_book(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<Book>, StatusCode> {
    state
        .lock()
        .unwrap()
        .books
        .iter()
        .find(|b| b.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_book(
    State(state): State<Shared>,
    Json(new): Json<NewBook>,
) -> (StatusCode, Json<Book>) {
    let mut library = state.lock().unwrap();
    let id = library.assign_id();
    let book = new.with_id(id);
    library.books.push(book.clone());
    (StatusCode::CREATED, Json(book))
}

async fn update_book(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(book): Json<Book>,
) -> Result<Json<Book>, StatusCode> {
    let mut library = state.lock().unwrap();
    let slot = library
        .books
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = Book { id, ..book };
    Ok(Json(slot.clone()))
}

async fn delete_book(State(state): State<Shared>, Path(id): Path<String>) -> StatusCode {
    let mut library = state.lock().unwrap();
    if !library.books.iter().any(|b| b.id == id) {
        return StatusCode::NOT_FOUND;
    }
    if library.active_count(&id) > 0 {
        return StatusCode::CONFLICT;
    }
    library.books.retain(|b| b.id != id);
    StatusCode::OK
}

async fn reserve_book(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(request): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), StatusCode> {
    let mut library = state.lock().unwrap();
    let book = library
        .books
        .iter()
        .find(|b| b.id == id)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    if library.active_count(&id) >= book.available_count as usize {
        return Err(StatusCode::CONFLICT);
    }
    let now = Utc::now();
    let reservation = Reservation {
        id: library.assign_id(),
        book_id: id,
        user_id: None,
        user_name: request.name,
        reserved_at: now,
        expected_return_at: now + Duration::days(7),
        returned_at: None,
        cancelled_at: None,
        returned: false,
        cancelled: false,
    };
    library.reservations.push(reservation.clone());
    Ok((StatusCode::CREATED, Json(reservation)))
}

async fn list_reservations(State(state): State<Shared>) -> Json<Vec<Reservation>> {
    Json(state.lock().unwrap().reservations.clone())
}

async fn get_reservation(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<Reservation>, StatusCode> {
    state
        .lock()
        .unwrap()
        .reservations
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn return_reservation(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<Reservation>, StatusCode> {
    finalize(state, &id, true)
}

async fn cancel_reservation(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<Reservation>, StatusCode> {
    finalize(state, &id, false)
}

fn finalize(state: Shared, id: &str, returned: bool) -> Result<Json<Reservation>, StatusCode> {
    let mut library = state.lock().unwrap();
    let reservation = library
        .reservations
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if reservation.is_finalized() {
        return Err(StatusCode::CONFLICT);
    }
    let now = Utc::now();
    if returned {
        reservation.returned = true;
        reservation.returned_at = Some(now);
    } else {
        reservation.cancelled = true;
        reservation.cancelled_at = Some(now);
    }
    Ok(Json(reservation.clone()))
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let state = Shared::default();
        let app = router(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn hobbit() -> NewBook {
    NewBook {
        title: "O Hobbit".to_string(),
        author: "J.R.R. Tolkien".to_string(),
        genre: "Fantasia".to_string(),
        publication: NaiveDate::from_ymd_opt(1937, 9, 21).unwrap(),
        available_count: 3,
    }
}

fn ana() -> ReservationRequest {
    ReservationRequest {
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        phone: "11 99999-0000".to_string(),
    }
}

#[tokio::test]
async fn create_book_round_trips_into_the_listing() {
    let server = TestServer::spawn().await;
    let client = server.client();

    client.create_book(&hobbit()).await.unwrap();

    let books = client.list_books().await.unwrap();
    let matches: Vec<_> = books.iter().filter(|b| b.title == "O Hobbit").collect();
    assert_eq!(matches.len(), 1);
    let book = matches[0];
    assert_eq!(book.author, "J.R.R. Tolkien");
    assert_eq!(book.genre, "Fantasia");
    assert_eq!(book.publication, NaiveDate::from_ymd_opt(1937, 9, 21).unwrap());
    assert_eq!(book.available_count, 3);
}

#[tokio::test]
async fn search_filters_case_insensitively_and_omits_empty_params() {
    let server = TestServer::spawn().await;
    let client = server.client();

    client.create_book(&hobbit()).await.unwrap();
    client
        .create_book(&NewBook {
            title: "Dom Casmurro".to_string(),
            author: "Machado de Assis".to_string(),
            genre: "Romance".to_string(),
            publication: NaiveDate::from_ymd_opt(1899, 1, 1).unwrap(),
            available_count: 1,
        })
        .await
        .unwrap();

    let query = estante_client::BookQuery {
        title: "hobbit".to_string(),
        ..Default::default()
    };
    let found = client.search_books(&query).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "O Hobbit");

    let everything = client.search_books(&Default::default()).await.unwrap();
    assert_eq!(everything.len(), 2);
}

#[tokio::test]
async fn update_changes_subsequent_listings() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let created = client.create_book(&hobbit()).await.unwrap();
    let mut edited = created.clone();
    edited.genre = "Fantasia épica".to_string();
    edited.available_count = 5;

    client.update_book(&edited).await.unwrap();

    let fetched = client.get_book(&created.id).await.unwrap();
    assert_eq!(fetched.genre, "Fantasia épica");
    assert_eq!(fetched.available_count, 5);
}

#[tokio::test]
async fn deleting_a_reserved_book_conflicts_and_keeps_it_listed() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let book = client.create_book(&hobbit()).await.unwrap();
    client.create_reservation(&book.id, &ana()).await.unwrap();

    let err = client.delete_book(&book.id).await.unwrap_err();
    match err {
        ApiError::Conflict(conflict) => {
            assert_eq!(conflict, Conflict::BookHasActiveReservations)
        }
        other => panic!("expected conflict, got {other:?}"),
    }

    let books = client.list_books().await.unwrap();
    assert!(books.iter().any(|b| b.id == book.id));
}

#[tokio::test]
async fn deleting_an_unreserved_book_removes_it() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let book = client.create_book(&hobbit()).await.unwrap();
    client.delete_book(&book.id).await.unwrap();

    let books = client.list_books().await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn reserving_without_copies_conflicts_and_creates_nothing() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let book = client
        .create_book(&NewBook {
            available_count: 0,
            ..hobbit()
        })
        .await
        .unwrap();

    let err = client.create_reservation(&book.id, &ana()).await.unwrap_err();
    match err {
        ApiError::Conflict(conflict) => assert_eq!(conflict, Conflict::NoCopiesAvailable),
        other => panic!("expected conflict, got {other:?}"),
    }

    assert!(client.list_reservations().await.unwrap().is_empty());
}

#[tokio::test]
async fn finalizing_twice_conflicts_and_leaves_state_untouched() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let book = client.create_book(&hobbit()).await.unwrap();
    let reservation = client.create_reservation(&book.id, &ana()).await.unwrap();

    let returned = client.return_reservation(&reservation.id).await.unwrap();
    assert!(returned.returned);
    assert!(returned.returned_at.is_some());

    let err = client.return_reservation(&reservation.id).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Conflict(Conflict::ReservationAlreadyFinalized)
    ));
    let err = client.cancel_reservation(&reservation.id).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Conflict(Conflict::ReservationAlreadyFinalized)
    ));

    let current = client.get_reservation(&reservation.id).await.unwrap();
    assert!(current.returned);
    assert!(!current.cancelled);
    assert!(current.cancelled_at.is_none());
}

#[tokio::test]
async fn cancelled_reservation_moves_from_active_to_history() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let book = client.create_book(&hobbit()).await.unwrap();
    let reservation = client.create_reservation(&book.id, &ana()).await.unwrap();

    let all = client.list_reservations().await.unwrap();
    assert_eq!(reservation::active(&all).len(), 1);
    assert!(reservation::history(&all).is_empty());

    client.cancel_reservation(&reservation.id).await.unwrap();

    let all = client.list_reservations().await.unwrap();
    assert!(reservation::active(&all).is_empty());
    let history = reservation::history(&all);
    assert_eq!(history.len(), 1);
    assert!(history[0].cancelled);
}

#[tokio::test]
async fn fresh_fetch_surfaces_reservations_from_other_sessions() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let book = client.create_book(&hobbit()).await.unwrap();
    let snapshot = client.list_reservations().await.unwrap();
    assert!(reservation::search_active_by_user(&snapshot, "ana").is_empty());

    // A second session reserves the book after the first snapshot.
    let other = server.client();
    other.create_reservation(&book.id, &ana()).await.unwrap();

    let refreshed = client.list_reservations().await.unwrap();
    let found = reservation::search_active_by_user(&refreshed, "ana");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].user_name, "Ana Souza");
}

#[tokio::test]
async fn directory_resolves_titles_from_one_catalog_fetch() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let book = client.create_book(&hobbit()).await.unwrap();
    let reservation = client.create_reservation(&book.id, &ana()).await.unwrap();

    let directory = BookDirectory::load(&client).await.unwrap();
    let all = client.list_reservations().await.unwrap();
    let rows = directory.resolve(&all);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, reservation.id);
    assert_eq!(rows[0].1, "O Hobbit");
}

#[tokio::test]
async fn unknown_book_is_a_generic_status_failure() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let err = client.get_book("does-not-exist").await.unwrap_err();
    match err {
        ApiError::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_failure() {
    // Port 1 is never listening on loopback.
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = client.list_books().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
