use std::borrow::Cow;

use tonic::metadata::{errors::ToStrError, MetadataMap};

use crate::authorize::metadata::metadata_extractor::MetadataExtractor;

/// Extracts the value of a fixed metadata key as ascii.
///
/// Metadata keys are matched case-insensitively.
#[derive(Debug)]
pub struct DefaultMetadataExtractor {
    key: Cow<'static, str>,
}

impl DefaultMetadataExtractor {
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self { key: key.into() }
    }
}

impl MetadataExtractor for DefaultMetadataExtractor {
    type Error = DefaultMetadataError;

    #[tracing::instrument(skip_all, fields(key = %self.key))]
    fn extract_metadata<'a>(&self, metadata: &'a MetadataMap) -> Result<&'a str, Self::Error> {
        let value = metadata
            .get(self.key.as_ref())
            .ok_or(DefaultMetadataError::Missing)?
            .to_str()
            .map_err(DefaultMetadataError::Ascii)?;

        Ok(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefaultMetadataError {
    #[error("Metadata value not found")]
    Missing,
    #[error("Metadata ascii error: {0}")]
    Ascii(ToStrError),
}
