//! Role definitions and the home view each role lands on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_TRAINER: &str = "trainer";
pub const ROLE_TRAINEE: &str = "trainee";

/// The two roles an identity can hold. Determines which views are authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Trainer,
    Trainee,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trainer => ROLE_TRAINER,
            Self::Trainee => ROLE_TRAINEE,
        }
    }

    /// Path of the role-specific landing view.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Trainer => "/trainer",
            Self::Trainee => "/trainee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_TRAINER => Ok(Self::Trainer),
            ROLE_TRAINEE => Ok(Self::Trainee),
            _ => Err(CoreError::Validation(format!(
                "Invalid role '{s}'. Must be one of: {ROLE_TRAINER}, {ROLE_TRAINEE}"
            ))),
        }
    }
}
