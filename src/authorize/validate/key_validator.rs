use std::future::Future;

use tonic::metadata::MetadataMap;

use crate::authorize::authorizers::api_key::ApiKey;

/// Decides whether an extracted api key is accepted.
///
/// Runs for every call that passed extraction. The `Ok` value is attached to
/// the request for the wrapped service to read, the error aborts the call
/// as-is.
pub trait KeyValidator {
    type Authorized: Clone + Send + Sync + 'static;

    type Error;

    fn validate(
        &self,
        api_key: ApiKey,
        metadata: &MetadataMap,
    ) -> impl Future<Output = Result<Self::Authorized, Self::Error>> + Send;
}

/// [`KeyValidator`] backed by an async closure over the api key alone.
#[derive(Clone)]
pub struct ValidatorFn<F> {
    validate: F,
}

pub fn validator_fn<F>(validate: F) -> ValidatorFn<F> {
    ValidatorFn { validate }
}

impl<F> core::fmt::Debug for ValidatorFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorFn")
            .field("validate", &"...")
            .finish()
    }
}

impl<F, Fut, T, E> KeyValidator for ValidatorFn<F>
where
    F: Fn(ApiKey) -> Fut + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Clone + Send + Sync + 'static,
{
    type Authorized = T;

    type Error = E;

    async fn validate(&self, api_key: ApiKey, _: &MetadataMap) -> Result<T, E> {
        (self.validate)(api_key).await
    }
}
