mod layer;
mod service;

pub use layer::{AuthorizationLayer, AuthorizationLayerExt};
pub use service::AuthorizationService;
