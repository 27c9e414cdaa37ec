//! Domain core of the OnboardPro training service.
//!
//! Pure types and rules with no HTTP or storage dependencies:
//!
//! - [`identity`] -- current identity, credential directory, session snapshot.
//!   [`identity::IdentityStore`] is the client-side session context; the API
//!   server only uses [`identity::CredentialDirectory`].
//! - [`catalog`] -- modules, sub-modules, and the [`catalog::CatalogProvider`] trait.
//! - [`progress`] -- summaries, percentages, the sub-module state machine.
//! - [`access`] -- the Allow / Deny access gate.
//! - [`quiz`] -- quiz scoring and remarks.
//! - [`navigation`] -- path to view resolution.

pub mod access;
pub mod catalog;
pub mod error;
pub mod identity;
pub mod leaderboard;
pub mod navigation;
pub mod password;
pub mod progress;
pub mod quiz;
pub mod roles;
pub mod session_storage;
pub mod types;
