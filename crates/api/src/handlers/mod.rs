pub mod auth;
pub mod dashboard;
pub mod leaderboard;
pub mod modules;
pub mod navigation;
pub mod profile;
pub mod progress;
pub mod quiz;
pub mod trainer;

use onboardpro_core::error::CoreError;
use validator::Validate;

use crate::error::AppResult;

/// Run `validator` rules on a request body, as a 400 on failure.
pub(crate) fn validate_body<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()).into())
}
