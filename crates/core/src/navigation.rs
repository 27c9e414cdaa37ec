//! View resolution: maps navigation paths to views and runs the access gate
//! for each protected target.

use serde::Serialize;

use crate::access::{authorize, Access};
use crate::identity::Identity;
use crate::roles::Role;
use crate::types::EntityId;

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Safe default offered from the not-found view.
pub const RECOVERY_PATH: &str = DASHBOARD_PATH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Login,
    Dashboard,
    TrainerArea { subpath: String },
    TraineeArea { subpath: String },
    ModuleDetail { module_id: EntityId },
    SubModule { module_id: EntityId, section_id: EntityId },
    Leaderboard,
    Profile,
    NotFound { recovery: &'static str },
}

/// Outcome of resolving a path before any access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    View(View),
    Redirect(&'static str),
}

impl View {
    /// Role a view is restricted to, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::TrainerArea { .. } => Some(Role::Trainer),
            Self::TraineeArea { .. } => Some(Role::Trainee),
            _ => None,
        }
    }

    /// Whether the view needs an identity at all.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound { .. })
    }
}

/// Map a path (query and fragment ignored) to a route.
pub fn resolve(path: &str) -> Route {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let view = match segments.as_slice() {
        [] => return Route::Redirect(DASHBOARD_PATH),
        ["login"] => View::Login,
        ["dashboard"] => View::Dashboard,
        ["trainer", rest @ ..] => View::TrainerArea {
            subpath: rest.join("/"),
        },
        ["trainee", rest @ ..] => View::TraineeArea {
            subpath: rest.join("/"),
        },
        ["modules", module_id] => View::ModuleDetail {
            module_id: (*module_id).to_string(),
        },
        ["modules", module_id, "sections", section_id] => View::SubModule {
            module_id: (*module_id).to_string(),
            section_id: (*section_id).to_string(),
        },
        ["leaderboard"] => View::Leaderboard,
        ["profile"] => View::Profile,
        _ => View::NotFound {
            recovery: RECOVERY_PATH,
        },
    };
    Route::View(view)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Navigation {
    Render { view: View },
    Redirect { to: &'static str },
}

/// Resolve `path` for the given caller, consulting the access gate.
///
/// Denied callers are redirected: to the login view when signed out, to
/// their own role home on a role mismatch. A signed-in caller asking for the
/// login view goes to their role home.
pub fn navigate(identity: Option<&Identity>, path: &str) -> Navigation {
    let view = match resolve(path) {
        Route::Redirect(to) => return Navigation::Redirect { to },
        Route::View(view) => view,
    };

    if let (View::Login, Some(identity)) = (&view, identity) {
        return Navigation::Redirect {
            to: identity.role.home_path(),
        };
    }
    if !view.is_protected() {
        return Navigation::Render { view };
    }

    match authorize(identity, view.required_role()) {
        Access::Allow => Navigation::Render { view },
        Access::Deny(reason) => Navigation::Redirect {
            to: reason.redirect(),
        },
    }
}
