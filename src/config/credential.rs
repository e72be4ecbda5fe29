//! Signing credential resolution.
//!
//! A credential pairs the public access key id with the secret key used to
//! sign requests. When the caller does not supply both keys, they are read
//! from [`ACCESS_KEY_ENV`] and [`SECRET_KEY_ENV`].

use crate::config::newtypes::{AccessKeyId, SecretKey};
use crate::error::ConfigError;

/// Environment variable holding the access key id.
pub const ACCESS_KEY_ENV: &str = "AWS_ACCESS_KEY";

/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "AWS_SECRET_KEY";

/// An access key id and secret key pair.
///
/// The secret stays masked in `Debug` output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    access_key: AccessKeyId,
    secret_key: SecretKey,
}

impl Credential {
    /// Creates a credential from validated keys.
    #[must_use]
    pub const fn new(access_key: AccessKeyId, secret_key: SecretKey) -> Self {
        Self {
            access_key,
            secret_key,
        }
    }

    /// Reads both keys from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] unless both variables are
    /// set to non-empty values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads both keys through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] unless both keys resolve to
    /// non-empty values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key = lookup(ACCESS_KEY_ENV).and_then(|key| AccessKeyId::new(key).ok());
        let secret_key = lookup(SECRET_KEY_ENV).and_then(|key| SecretKey::new(key).ok());

        match (access_key, secret_key) {
            (Some(access_key), Some(secret_key)) => Ok(Self::new(access_key, secret_key)),
            _ => Err(ConfigError::MissingCredentials),
        }
    }

    /// Returns the access key id.
    #[must_use]
    pub const fn access_key(&self) -> &AccessKeyId {
        &self.access_key
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_from_lookup_reads_both_keys() {
        let vars = env(&[(ACCESS_KEY_ENV, "AccessKey"), (SECRET_KEY_ENV, "SecretKey")]);
        let credential = Credential::from_lookup(|name| vars.get(name).cloned()).unwrap();

        assert_eq!(credential.access_key().as_ref(), "AccessKey");
        assert_eq!(credential.secret_key().as_ref(), "SecretKey");
    }

    #[test]
    fn test_from_lookup_requires_both_keys() {
        let vars = env(&[(ACCESS_KEY_ENV, "AccessKey")]);
        let result = Credential::from_lookup(|name| vars.get(name).cloned());
        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn test_from_lookup_treats_empty_values_as_missing() {
        let vars = env(&[(ACCESS_KEY_ENV, ""), (SECRET_KEY_ENV, "SecretKey")]);
        let result = Credential::from_lookup(|name| vars.get(name).cloned());
        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn test_debug_masks_secret() {
        let credential = Credential::new(
            AccessKeyId::new("AccessKey").unwrap(),
            SecretKey::new("SecretKey").unwrap(),
        );
        let debug = format!("{credential:?}");
        assert!(debug.contains("AccessKey"));
        assert!(debug.contains("SecretKey(*****)"));
        assert!(!debug.contains("\"SecretKey\""));
    }
}
