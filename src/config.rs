use std::collections::HashMap;

use serde::Deserialize;
use tonic::{
    metadata::{
        errors::{InvalidMetadataKey, InvalidMetadataValue},
        AsciiMetadataKey, AsciiMetadataValue, MetadataMap,
    },
    Code,
};

use crate::{
    authorize::metadata::api_key::DefaultApiKeyExtractor,
    reject::{Rejection, RejectionDescriptor},
};

/// Declarative counterpart of the
/// [`ApiKeyAuthorizer`](crate::authorize::authorizers::api_key::ApiKeyAuthorizer)
/// constructors, meant to be embedded in the configuration of a server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiKeyAuthConfig {
    /// Key field to accept. Absent or empty means `apikey`.
    pub key_field: Option<String>,
    /// Status answered for calls that fail extraction. Absent means
    /// `unauthenticated` with the default message.
    pub error: Option<RejectionConfig>,
}

impl ApiKeyAuthConfig {
    pub fn extractor(&self) -> DefaultApiKeyExtractor {
        match &self.key_field {
            Some(key_field) => DefaultApiKeyExtractor::new(key_field.clone()),
            None => DefaultApiKeyExtractor::default(),
        }
    }

    pub fn rejection(&self) -> Result<Option<Rejection>, ConfigError> {
        self.error
            .as_ref()
            .map(RejectionConfig::to_rejection)
            .transpose()
    }
}

/// Status forms accepted in configuration: a bare message or a descriptor
/// with code, message and metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RejectionConfig {
    Message(String),
    Descriptor {
        message: Option<String>,
        code: Option<i32>,
        #[serde(default)]
        metadata: HashMap<String, String>,
    },
}

impl RejectionConfig {
    pub fn to_rejection(&self) -> Result<Rejection, ConfigError> {
        match self {
            Self::Message(message) if message.is_empty() => Ok(Rejection::default()),
            Self::Message(message) => Ok(Rejection::message(message.clone())),
            Self::Descriptor {
                message,
                code,
                metadata,
            } => {
                let mut descriptor = RejectionDescriptor::new();

                if let Some(message) = message {
                    descriptor = descriptor.message(message.clone());
                }

                if let Some(code) = code {
                    descriptor = descriptor.code(parse_code(*code)?);
                }

                descriptor = descriptor.metadata(parse_metadata(metadata)?);

                Ok(Rejection::descriptor(descriptor))
            }
        }
    }
}

// Code::from_i32 maps everything outside the grpc code range to Code::Unknown.
fn parse_code(code: i32) -> Result<Code, ConfigError> {
    if !(0..=16).contains(&code) {
        return Err(ConfigError::Code { code });
    }

    Ok(Code::from_i32(code))
}

fn parse_metadata(entries: &HashMap<String, String>) -> Result<MetadataMap, ConfigError> {
    let mut metadata = MetadataMap::with_capacity(entries.len());

    for (key, value) in entries {
        let parsed_key =
            AsciiMetadataKey::from_bytes(key.as_bytes()).map_err(|err| ConfigError::Key {
                key: key.clone(),
                source: err,
            })?;

        let parsed_value =
            value
                .parse::<AsciiMetadataValue>()
                .map_err(|err| ConfigError::Value {
                    key: key.clone(),
                    source: err,
                })?;

        metadata.insert(parsed_key, parsed_value);
    }

    Ok(metadata)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid grpc code `{code}`, expected a value between 0 and 16")]
    Code { code: i32 },
    #[error("Invalid metadata key `{key}`: {source}")]
    Key {
        key: String,
        source: InvalidMetadataKey,
    },
    #[error("Invalid metadata value for key `{key}`: {source}")]
    Value {
        key: String,
        source: InvalidMetadataValue,
    },
}
