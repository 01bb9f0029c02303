mod api_key_interceptor;

pub use api_key_interceptor::ApiKeyInterceptor;
