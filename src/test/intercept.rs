use tonic::service::Interceptor;

use crate::{
    authorize::authorizers::api_key::{ApiKey, ApiKeyAuthorizer},
    intercept::ApiKeyInterceptor,
};

use super::{init_tracing, request, run, FixedKeyValidator};

fn authorization(request: &tonic::Request<()>) -> &str {
    request
        .metadata()
        .get("authorization")
        .expect("Authorization metadata")
        .to_str()
        .expect("Ascii metadata value")
}

#[test]
fn attaches_the_default_key_field() {
    let mut interceptor = ApiKeyInterceptor::new(&ApiKey::new("11111")).expect("Valid api key");

    let request = interceptor
        .call(tonic::Request::new(()))
        .expect("Accepted request");

    assert_eq!(authorization(&request), "apikey 11111");
}

#[test]
fn attaches_a_custom_key_field() {
    let mut interceptor =
        ApiKeyInterceptor::with_key_field("api_key", &ApiKey::new("22222")).expect("Valid api key");

    let request = interceptor
        .call(tonic::Request::new(()))
        .expect("Accepted request");

    assert_eq!(authorization(&request), "api_key 22222");
}

#[test]
fn rejects_api_keys_that_are_not_valid_metadata_values() {
    ApiKeyInterceptor::new(&ApiKey::new("line\nbreak")).expect_err("Invalid api key");
}

#[test]
fn debug_never_prints_the_api_key() {
    let interceptor = ApiKeyInterceptor::new(&ApiKey::new("11111")).expect("Valid api key");

    assert!(!format!("{interceptor:?}").contains("11111"));
}

#[tokio::test]
async fn round_trips_into_the_authorization_service() {
    init_tracing();

    let mut interceptor =
        ApiKeyInterceptor::with_key_field("api_key", &ApiKey::new("22222")).expect("Valid api key");

    let outgoing = interceptor
        .call(tonic::Request::new(()))
        .expect("Accepted request");

    let mut incoming = request(None);
    *incoming.headers_mut() = outgoing.metadata().clone().into_headers();

    let authorizer = ApiKeyAuthorizer::with_key_field("api_key", FixedKeyValidator::new("22222"));

    let (response, calls) = run(authorizer, incoming).await;

    assert_eq!(calls, 1);
    assert_eq!(response.body(), "22222");
}
