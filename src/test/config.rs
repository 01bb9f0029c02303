use tonic::{metadata::MetadataMap, Code};

use crate::{
    authorize::authorizers::api_key::ApiKeyAuthorizer,
    config::{ApiKeyAuthConfig, ConfigError},
};

use super::{init_tracing, request, response_status, run, FixedKeyValidator};

fn config(json: &str) -> ApiKeyAuthConfig {
    serde_json::from_str(json).expect("Valid config")
}

#[test]
fn empty_config_uses_the_defaults() {
    let config = config("{}");

    assert_eq!(config.extractor().key_field(), "apikey");
    assert!(config.rejection().expect("Valid rejection").is_none());
}

#[test]
fn key_field_is_configurable() {
    let config = config(r#"{"key_field": "api_key"}"#);

    assert_eq!(config.extractor().key_field(), "api_key");
}

#[test]
fn empty_key_field_falls_back_to_the_default() {
    let config = config(r#"{"key_field": ""}"#);

    assert_eq!(config.extractor().key_field(), "apikey");
}

#[test]
fn message_error_form() {
    let config = config(r#"{"error": "Unauthorized"}"#);

    let rejection = config
        .rejection()
        .expect("Valid rejection")
        .expect("Configured rejection");

    let status = rejection.status(&MetadataMap::new());

    assert_eq!(status.code(), Code::Unauthenticated);
    assert_eq!(status.message(), "Unauthorized");
}

#[test]
fn empty_message_error_form_falls_back_to_the_default() {
    let config = config(r#"{"error": ""}"#);

    let rejection = config
        .rejection()
        .expect("Valid rejection")
        .expect("Configured rejection");

    let status = rejection.status(&MetadataMap::new());

    assert_eq!(status.message(), "Not Authorized");
}

#[test]
fn descriptor_error_form() {
    let config = config(
        r#"{"error": {"message": "Invalid key", "code": 3, "metadata": {"code": "INVALID_API_KEY"}}}"#,
    );

    let rejection = config
        .rejection()
        .expect("Valid rejection")
        .expect("Configured rejection");

    let status = rejection.status(&MetadataMap::new());

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "Invalid key");
    assert_eq!(
        status
            .metadata()
            .get("code")
            .and_then(|value| value.to_str().ok()),
        Some("INVALID_API_KEY")
    );
}

#[test]
fn descriptor_error_form_without_message_uses_the_default_message() {
    let config = config(r#"{"error": {"code": 7}}"#);

    let rejection = config
        .rejection()
        .expect("Valid rejection")
        .expect("Configured rejection");

    let status = rejection.status(&MetadataMap::new());

    assert_eq!(status.code(), Code::PermissionDenied);
    assert_eq!(status.message(), "Not Authorized");
}

#[test]
fn out_of_range_code_is_an_error() {
    for code in [-1, 17, 400] {
        let config = config(&format!(r#"{{"error": {{"code": {code}}}}}"#));

        let err = config.rejection().expect_err("Out of range code");

        assert!(matches!(err, ConfigError::Code { .. }));
    }
}

#[test]
fn unknown_fields_are_rejected() {
    serde_json::from_str::<ApiKeyAuthConfig>(r#"{"keyfield": "api_key"}"#)
        .expect_err("Unknown field");
}

#[test]
fn invalid_metadata_key_is_an_error() {
    let config = config(r#"{"error": {"metadata": {"bad key": "value"}}}"#);

    let err = config.rejection().expect_err("Invalid metadata key");

    assert!(matches!(err, ConfigError::Key { .. }));
}

#[test]
fn invalid_metadata_value_is_an_error() {
    let config = config(r#"{"error": {"metadata": {"code": "line\nbreak"}}}"#);

    let err = config.rejection().expect_err("Invalid metadata value");

    assert!(matches!(err, ConfigError::Value { .. }));
}

#[tokio::test]
async fn authorizer_from_config() {
    init_tracing();

    let config = config(r#"{"key_field": "api_key", "error": "Unauthorized"}"#);

    let authorizer = ApiKeyAuthorizer::from_config(&config, FixedKeyValidator::new("22222"))
        .expect("Valid config");

    let (response, calls) = run(authorizer.clone(), request(Some("API_KEY 22222"))).await;

    assert_eq!(calls, 1);
    assert_eq!(response.body(), "22222");

    let (response, calls) = run(authorizer, request(Some("apikey 22222"))).await;

    assert_eq!(calls, 0);

    let status = response_status(&response);

    assert_eq!(status.code(), Code::Unauthenticated);
    assert_eq!(status.message(), "Unauthorized");
}
