//! `estante-client` — HTTP client for the library catalog backend.
//!
//! One async method per backend operation, a small error taxonomy
//! (transport / server failure / domain conflict / decode) and the
//! [`BookDirectory`] lookup table that resolves reservation rows to book
//! titles without a request per row.
//!
//! `reqwest` backs the transport on both native targets and wasm32 (where it
//! compiles down to `fetch`).

pub mod client;
pub mod directory;
pub mod error;

pub use client::{ApiClient, BookQuery, DEFAULT_API_URL};
pub use directory::BookDirectory;
pub use error::{ApiError, Conflict};
