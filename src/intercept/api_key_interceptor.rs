use http::header::AUTHORIZATION;
use tonic::{
    metadata::{errors::InvalidMetadataValue, AsciiMetadataValue},
    service::Interceptor,
    Request, Status,
};

use crate::authorize::{authorizers::api_key::ApiKey, metadata::api_key::DEFAULT_KEY_FIELD};

/// Client side [`Interceptor`] attaching `<key field> <api key>` as the
/// `authorization` metadata value of every outgoing request.
///
/// The debug representation never prints the key.
#[derive(Clone)]
pub struct ApiKeyInterceptor {
    value: AsciiMetadataValue,
}

impl ApiKeyInterceptor {
    pub fn new(api_key: &ApiKey) -> Result<Self, InvalidMetadataValue> {
        Self::with_key_field(DEFAULT_KEY_FIELD, api_key)
    }

    pub fn with_key_field(
        key_field: &str,
        api_key: &ApiKey,
    ) -> Result<Self, InvalidMetadataValue> {
        let value = AsciiMetadataValue::try_from(format!("{} {}", key_field, api_key.value))?;

        Ok(Self { value })
    }
}

impl core::fmt::Debug for ApiKeyInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyInterceptor")
            .field("value", &"...")
            .finish()
    }
}

impl Interceptor for ApiKeyInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request
            .metadata_mut()
            .insert(AUTHORIZATION.as_str(), self.value.clone());

        tracing::debug!("Attached api key to outgoing request");

        Ok(request)
    }
}
