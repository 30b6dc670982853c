//! Inbound presign request and its validation

use serde::{Deserialize, Deserializer};

use super::{error::ValidationError, object_path::clean_segment};

/// Body of `POST /presign`
///
/// Missing and `null` fields take their defaults; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PresignRequest {
    /// Bucket holding the object
    #[serde(deserialize_with = "null_as_default")]
    pub bucket: String,
    /// Optional folder prefix
    #[serde(deserialize_with = "null_as_default")]
    pub folder: String,
    /// Object key or file name
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    /// Expiration days
    #[serde(deserialize_with = "null_as_default")]
    pub days: i64,
    /// Expiration hours
    #[serde(deserialize_with = "null_as_default")]
    pub hours: i64,
    /// Expiration minutes
    #[serde(deserialize_with = "null_as_default")]
    pub minutes: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PresignRequest {
    /// Trims the text fields and checks the required ones
    ///
    /// Duration components are not checked here.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingBucket` - bucket is blank
    /// - `ValidationError::MissingKey` - key is blank, or only a separator
    pub fn validate(self) -> Result<Self, ValidationError> {
        let request = Self {
            bucket: self.bucket.trim().to_string(),
            folder: self.folder.trim().to_string(),
            key: self.key.trim().to_string(),
            ..self
        };

        if request.bucket.is_empty() {
            return Err(ValidationError::MissingBucket);
        }
        if clean_segment(&request.key).is_empty() {
            return Err(ValidationError::MissingKey);
        }

        Ok(request)
    }
}
