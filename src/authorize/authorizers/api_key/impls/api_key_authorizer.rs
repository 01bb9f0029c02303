use std::{borrow::Cow, ops::Deref, sync::Arc};

use tonic::{metadata::MetadataMap, Status};

use crate::{
    authorize::{
        authorizer::Authorizer,
        metadata::api_key::{ApiKeyExtractor, DefaultApiKeyExtractor},
        validate::KeyValidator,
    },
    config::{ApiKeyAuthConfig, ConfigError},
    reject::Rejection,
};

use super::api_key::ApiKey;

#[derive(Debug)]
pub struct ApiKeyAuthorizerInner<X, V> {
    extractor: X,
    validator: V,
}

impl<X, V> ApiKeyAuthorizerInner<X, V> {
    pub const fn new(extractor: X, validator: V) -> Self {
        Self {
            extractor,
            validator,
        }
    }
}

/// Authorizes calls by extracting an api key from the `authorization`
/// metadata value and passing it to a [`KeyValidator`].
///
/// Extraction failures are answered with the configured [`Rejection`].
/// Validator errors are answered as-is.
#[derive(Debug)]
pub struct ApiKeyAuthorizer<X, V> {
    inner: Arc<ApiKeyAuthorizerInner<X, V>>,
    rejection: Rejection,
}

impl<V> ApiKeyAuthorizer<DefaultApiKeyExtractor, V> {
    pub fn new(validator: V) -> Self {
        Self::with_extractor(DefaultApiKeyExtractor::default(), validator)
    }

    pub fn with_key_field(key_field: impl Into<Cow<'static, str>>, validator: V) -> Self {
        Self::with_extractor(DefaultApiKeyExtractor::new(key_field), validator)
    }

    pub fn from_config(config: &ApiKeyAuthConfig, validator: V) -> Result<Self, ConfigError> {
        let authorizer = Self::with_extractor(config.extractor(), validator);

        match config.rejection()? {
            Some(rejection) => Ok(authorizer.rejection(rejection)),
            None => Ok(authorizer),
        }
    }
}

impl<X, V> ApiKeyAuthorizer<X, V> {
    pub fn with_extractor(extractor: X, validator: V) -> Self {
        Self {
            inner: Arc::new(ApiKeyAuthorizerInner::new(extractor, validator)),
            rejection: Rejection::default(),
        }
    }

    pub fn rejection(mut self, rejection: Rejection) -> Self {
        self.rejection = rejection;
        self
    }
}

impl<X, V> Clone for ApiKeyAuthorizer<X, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            rejection: self.rejection.clone(),
        }
    }
}

impl<X, V> Deref for ApiKeyAuthorizer<X, V> {
    type Target = ApiKeyAuthorizerInner<X, V>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<X, V> Authorizer for ApiKeyAuthorizer<X, V>
where
    X: ApiKeyExtractor + Send + Sync,
    X::Error: std::error::Error,
    V: KeyValidator + Send + Sync,
    V::Error: Into<Status>,
{
    type Authorized = V::Authorized;

    type Error = Status;

    #[tracing::instrument(skip_all)]
    async fn authorize(&self, metadata: &MetadataMap) -> Result<Self::Authorized, Self::Error> {
        let credential = match self.extractor.extract_api_key(metadata) {
            Ok(credential) => credential,
            Err(err) => {
                tracing::warn!(err = %err, "Unauthorized");

                return Err(self.rejection.status(metadata));
            }
        };

        let api_key = ApiKey::new(credential.to_string());

        self.validator
            .validate(api_key, metadata)
            .await
            .map_err(Into::into)
    }
}
