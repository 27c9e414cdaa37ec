//! Access Control Gate.
//!
//! Decides, per navigation target, whether the caller may proceed. The result
//! is an explicit [`Access`] value; callers turn a denial into a redirect
//! instead of silently rendering nothing.

use serde::Serialize;

use crate::identity::Identity;
use crate::roles::Role;

/// Where unauthenticated callers are sent.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DenyReason {
    Unauthenticated,
    WrongRole { required: Role, actual: Role },
}

impl DenyReason {
    /// Redirect target for the denied caller: the login view, or the home
    /// view of the role the caller actually holds.
    pub fn redirect(&self) -> &'static str {
        match self {
            Self::Unauthenticated => LOGIN_PATH,
            Self::WrongRole { actual, .. } => actual.home_path(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Unauthenticated => "Authentication required".to_string(),
            Self::WrongRole { required, .. } => format!("The {required} role is required"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny(DenyReason),
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// `Ok(())` on allow, the deny reason otherwise.
    pub fn into_result(self) -> Result<(), DenyReason> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(reason),
        }
    }
}

/// Rules, in order:
///
/// 1. No identity: deny as unauthenticated.
/// 2. A required role the identity does not hold: deny as wrong role.
/// 3. Otherwise allow.
pub fn authorize(identity: Option<&Identity>, required_role: Option<Role>) -> Access {
    let Some(identity) = identity else {
        return Access::Deny(DenyReason::Unauthenticated);
    };

    match required_role {
        Some(required) if identity.role != required => Access::Deny(DenyReason::WrongRole {
            required,
            actual: identity.role,
        }),
        _ => Access::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            id: "7".into(),
            name: "Someone".into(),
            email: "someone@example.com".into(),
            role,
            avatar: None,
        }
    }

    #[test]
    fn trainee_on_trainer_route_is_wrong_role() {
        let trainee = identity(Role::Trainee);
        assert_eq!(
            authorize(Some(&trainee), Some(Role::Trainer)),
            Access::Deny(DenyReason::WrongRole {
                required: Role::Trainer,
                actual: Role::Trainee,
            })
        );
    }

    #[test]
    fn missing_identity_is_unauthenticated_for_any_requirement() {
        for required in [None, Some(Role::Trainer), Some(Role::Trainee)] {
            assert_eq!(
                authorize(None, required),
                Access::Deny(DenyReason::Unauthenticated)
            );
        }
    }

    #[test]
    fn matching_role_or_no_requirement_is_allowed() {
        let trainer = identity(Role::Trainer);
        assert!(authorize(Some(&trainer), Some(Role::Trainer)).is_allowed());
        assert!(authorize(Some(&trainer), None).is_allowed());
    }

    #[test]
    fn redirects_point_to_login_or_own_home() {
        assert_eq!(DenyReason::Unauthenticated.redirect(), "/login");
        let reason = DenyReason::WrongRole {
            required: Role::Trainer,
            actual: Role::Trainee,
        };
        assert_eq!(reason.redirect(), "/trainee");
    }

    #[test]
    fn re_login_as_other_role_takes_effect_immediately() {
        let mut current = identity(Role::Trainee);
        assert!(!authorize(Some(&current), Some(Role::Trainer)).is_allowed());

        current = identity(Role::Trainer);
        assert!(authorize(Some(&current), Some(Role::Trainer)).is_allowed());
    }
}
