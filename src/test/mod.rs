mod config;
mod intercept;

use std::{
    convert::Infallible,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use http::{Request, Response};
use tonic::{metadata::MetadataMap, Status};
use tower::{service_fn, ServiceExt};

use crate::{
    authorize::{
        authorizer::Authorizer,
        authorizers::api_key::ApiKey,
        extract::{Authorized, AuthorizedExt},
        validate::KeyValidator,
    },
    extension::AuthorizationService,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn request(authorization: Option<&str>) -> Request<String> {
    let mut builder = Request::builder().uri("/package.Service/Method");

    if let Some(authorization) = authorization {
        builder = builder.header(http::header::AUTHORIZATION, authorization);
    }

    builder
        .body(String::new())
        .expect("Failed to build request")
}

/// Accepts exactly one api key and counts its invocations.
#[derive(Debug, Clone)]
pub struct FixedKeyValidator {
    valid: &'static str,
    validated: Arc<AtomicUsize>,
}

impl FixedKeyValidator {
    pub fn new(valid: &'static str) -> Self {
        Self {
            valid,
            validated: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn validated(&self) -> usize {
        self.validated.load(Ordering::SeqCst)
    }
}

impl KeyValidator for FixedKeyValidator {
    type Authorized = ApiKey;

    type Error = Status;

    async fn validate(&self, api_key: ApiKey, _: &MetadataMap) -> Result<ApiKey, Status> {
        self.validated.fetch_add(1, Ordering::SeqCst);

        if api_key == self.valid {
            return Ok(api_key);
        }

        Err(Status::permission_denied("Unknown api key"))
    }
}

/// Runs one call through an [`AuthorizationService`] wrapping a service that
/// echoes the authorized api key into the response body.
///
/// Returns the response and the number of calls that reached the wrapped
/// service.
pub async fn run<A>(authorizer: A, request: Request<String>) -> (Response<String>, usize)
where
    A: Authorizer<Authorized = ApiKey> + Clone + Send + 'static,
    A::Error: Into<Status>,
{
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let service = service_fn(move |request: Request<String>| {
        let seen = seen.clone();

        async move {
            seen.fetch_add(1, Ordering::SeqCst);

            let body = match request.authorized::<ApiKey>() {
                Ok(Authorized(api_key)) => api_key.value.into_owned(),
                Err(_) => String::new(),
            };

            Ok::<_, Infallible>(Response::new(body))
        }
    });

    let response = AuthorizationService::new(service, authorizer)
        .oneshot(request)
        .await
        .expect("Infallible");

    (response, calls.load(Ordering::SeqCst))
}

pub fn response_status(response: &Response<String>) -> Status {
    Status::from_header_map(response.headers()).expect("Response has no grpc status")
}
