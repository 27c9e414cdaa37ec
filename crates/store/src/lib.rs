//! In-memory collaborators behind the OnboardPro services.
//!
//! Everything here is replaceable: the mock catalog reads an embedded seed
//! document, the credential directory is built from demo accounts, and the
//! per-trainee progress and refresh sessions live in process memory. The
//! only thing that touches disk is [`file_storage::FileStorage`].

pub mod accounts;
pub mod catalog;
pub mod file_storage;
pub mod models;
pub mod progress;
pub mod repositories;
pub mod seed;
