pub mod api_key;
pub mod api_key_authorizer;
