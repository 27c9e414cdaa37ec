//! Demo credential directory built from the seed accounts.

use onboardpro_core::error::CoreError;
use onboardpro_core::identity::{CredentialDirectory, CredentialRecord};
use onboardpro_core::password::hash_password;

use crate::seed::Dataset;

/// Hash every seed account's password and build the login directory.
pub fn credential_directory(dataset: &Dataset) -> Result<CredentialDirectory, CoreError> {
    let records = dataset
        .accounts
        .iter()
        .map(|account| {
            Ok(CredentialRecord {
                identity: account.identity.clone(),
                password_hash: hash_password(&account.password)?,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    tracing::debug!(accounts = records.len(), "Credential directory ready");
    Ok(CredentialDirectory::new(records))
}
