//! Expiration durations in the signing tool's composite notation

use std::fmt;

use serde::Serialize;

use super::error::ValidationError;

/// Expiration used when the request asks for no explicit duration
pub const DEFAULT_EXPIRATION: &str = "15m";

/// Composite duration such as `2d3h15m`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpirationSpec(String);

impl ExpirationSpec {
    /// Formats the non-zero components as `<n>d`, `<n>h`, `<n>m`, in that order
    ///
    /// Returns `None` when any component is negative or all are zero.
    #[must_use]
    pub fn format(days: i64, hours: i64, minutes: i64) -> Option<Self> {
        if days < 0 || hours < 0 || minutes < 0 {
            return None;
        }

        let spec: String = [(days, 'd'), (hours, 'h'), (minutes, 'm')]
            .into_iter()
            .filter(|(magnitude, _)| *magnitude > 0)
            .map(|(magnitude, unit)| format!("{magnitude}{unit}"))
            .collect();

        if spec.is_empty() {
            None
        } else {
            Some(Self(spec))
        }
    }

    /// Resolves the expiration for a request
    ///
    /// All-zero input maps to [`DEFAULT_EXPIRATION`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NegativeDuration` if any component is negative
    pub fn resolve(days: i64, hours: i64, minutes: i64) -> Result<Self, ValidationError> {
        if days < 0 || hours < 0 || minutes < 0 {
            return Err(ValidationError::NegativeDuration);
        }

        Ok(Self::format(days, hours, minutes).unwrap_or_default())
    }

    /// The formatted duration
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ExpirationSpec {
    fn default() -> Self {
        Self(DEFAULT_EXPIRATION.to_string())
    }
}

impl fmt::Display for ExpirationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
