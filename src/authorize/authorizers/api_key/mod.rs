mod impls;

pub use impls::{
    api_key::ApiKey,
    api_key_authorizer::{ApiKeyAuthorizer, ApiKeyAuthorizerInner},
};
