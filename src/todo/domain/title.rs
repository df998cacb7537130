//! Validated todo title.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum title length in characters, after trimming.
const MIN_TITLE_LENGTH: usize = 2;

/// Maximum title length in characters, after trimming.
const MAX_TITLE_LENGTH: usize = 255;

/// Trimmed todo title between 2 and 255 characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Creates a validated title.
    ///
    /// The input is trimmed before its length is checked. Length is counted
    /// in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::TitleTooShort`] or
    /// [`TodoDomainError::TitleTooLong`] when the trimmed value falls outside
    /// the accepted range.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TodoDomainError> {
        let trimmed = value.as_ref().trim();
        let length = trimmed.chars().count();

        if length < MIN_TITLE_LENGTH {
            return Err(TodoDomainError::TitleTooShort {
                min: MIN_TITLE_LENGTH,
                actual: length,
            });
        }
        if length > MAX_TITLE_LENGTH {
            return Err(TodoDomainError::TitleTooLong {
                max: MAX_TITLE_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TodoTitle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
