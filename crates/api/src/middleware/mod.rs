//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- The caller's identity, from a JWT Bearer token.
//! - [`rbac::RequireAuth`] -- Any signed-in caller.
//! - [`rbac::RequireTrainer`] -- Requires the `trainer` role.
//! - [`rbac::RequireTrainee`] -- Requires the `trainee` role.

pub mod auth;
pub mod rbac;
