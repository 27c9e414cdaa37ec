//! Token primitives for the HTTP layer.
//!
//! - [`jwt`] -- access tokens carrying the caller's identity, plus
//!   refresh-token helpers.
//!
//! Password hashing lives in `onboardpro_core::password`, next to the
//! credential directory that uses it.

pub mod jwt;
