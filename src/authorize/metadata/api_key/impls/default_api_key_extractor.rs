use std::borrow::Cow;

use http::header::AUTHORIZATION;
use tonic::metadata::MetadataMap;

use crate::authorize::metadata::{
    api_key::api_key_extractor::ApiKeyExtractor,
    {DefaultMetadataError, DefaultMetadataExtractor, MetadataExtractor},
};

/// Key field expected in the authorization value when none is configured.
pub const DEFAULT_KEY_FIELD: &str = "apikey";

/// Extracts an api key from the `authorization` metadata value.
///
/// The value must consist of exactly two tokens separated by a single space.
/// The first token must match the configured key field, compared
/// case-insensitively. The second token is the api key.
#[derive(Debug)]
pub struct DefaultApiKeyExtractor {
    // This is not generic, because we have to make sure that the metadata key is always "authorization"
    metadata_extractor: DefaultMetadataExtractor,
    key_field: Cow<'static, str>,
}

impl DefaultApiKeyExtractor {
    /// An empty key field falls back to [`DEFAULT_KEY_FIELD`].
    pub fn new(key_field: impl Into<Cow<'static, str>>) -> Self {
        let key_field = match key_field.into() {
            field if field.is_empty() => Cow::Borrowed(DEFAULT_KEY_FIELD),
            field => field,
        };

        Self {
            metadata_extractor: DefaultMetadataExtractor::new(Cow::from(AUTHORIZATION.as_str())),
            key_field,
        }
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    fn extract_credential<'a>(
        &self,
        authorization: &'a str,
    ) -> Result<&'a str, DefaultApiKeyError> {
        let mut tokens = authorization.split(' ');

        let (key_field, credential) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(key_field), Some(credential), None) => (key_field, credential),
            _ => return Err(DefaultApiKeyError::Malformed),
        };

        if !key_field.eq_ignore_ascii_case(&self.key_field) {
            return Err(DefaultApiKeyError::KeyField);
        }

        if credential.is_empty() {
            return Err(DefaultApiKeyError::EmptyCredential);
        }

        Ok(credential)
    }
}

impl Default for DefaultApiKeyExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_FIELD)
    }
}

impl ApiKeyExtractor for DefaultApiKeyExtractor {
    type Error = DefaultApiKeyError;

    fn extract_api_key<'a>(&self, metadata: &'a MetadataMap) -> Result<&'a str, Self::Error> {
        let authorization = self.metadata_extractor.extract_metadata(metadata)?;
        let credential = self.extract_credential(authorization)?;

        Ok(credential)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefaultApiKeyError {
    #[error("Authorization metadata extraction error: {0}")]
    Metadata(
        #[source]
        #[from]
        DefaultMetadataError,
    ),
    #[error("Authorization value is not in the form: `<key field> <api key>`")]
    Malformed,
    #[error("Authorization key field does not match the configured key field")]
    KeyField,
    #[error("Authorization api key is empty")]
    EmptyCredential,
}
