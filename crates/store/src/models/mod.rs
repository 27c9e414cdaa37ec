//! Record types owned by the store.
//!
//! - `seed`: raw catalog document records, validated on load
//! - `session`: refresh-session rows and their create DTO

pub mod seed;
pub mod session;
