//! Deployment environment keys and the process-level selector.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{ENV_SELECTOR, Error};

/// A deployment environment key.
///
/// Environments are an open set: any string key that names a section of the
/// configuration document is a usable environment (`"dev1"`, `"staging"`,
/// ...). The two well-known keys get dedicated variants.
///
/// Only the process-environment selector path is strict about the key; see
/// [`Environment::from_selector`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The `production` environment.
    Production,
    /// The `development` environment.
    Development,
    /// Any other environment key present in the configuration document.
    Custom(String),
}

impl Environment {
    /// The string key this environment is stored under in the document.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Custom(key) => key,
        }
    }

    /// Parse a strict selector value, as read from the `NODE_ENV` variable.
    ///
    /// Unlike the open conversion in [`From<&str>`], only the two recognized
    /// keys are accepted here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEnvironmentValue`] for any value outside
    /// `{"production", "development"}`.
    pub fn from_selector(value: &str) -> Result<Self, Error> {
        match value {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            other => Err(Error::InvalidEnvironmentValue(other.to_owned())),
        }
    }

    /// Read the strict selector from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEnvironmentVariable`] when the selector
    /// variable is unset, or [`Error::InvalidEnvironmentValue`] when it
    /// holds an unrecognized value.
    pub fn from_process_env() -> Result<Self, Error> {
        let value = std::env::var(ENV_SELECTOR).map_err(|_| Error::MissingEnvironmentVariable)?;
        Self::from_selector(&value)
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            "development" => Self::Development,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Environment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
