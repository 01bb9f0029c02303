mod api_key_extractor;
mod impls;

pub use api_key_extractor::ApiKeyExtractor;
pub use impls::default_api_key_extractor::{
    DefaultApiKeyError, DefaultApiKeyExtractor, DEFAULT_KEY_FIELD,
};
