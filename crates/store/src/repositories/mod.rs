//! Repository layer.
//!
//! Repositories own their rows behind a `tokio::sync::RwLock` and expose
//! async methods, so swapping one for a database-backed version leaves call
//! sites unchanged.

pub mod session_repo;

pub use session_repo::SessionRepo;
