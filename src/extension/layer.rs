use tower::Layer;

use crate::authorize::authorizer::Authorizer;

use super::service::AuthorizationService;

#[derive(Debug, Clone)]
pub struct AuthorizationLayer<A> {
    authorizer: A,
}

impl<A> AuthorizationLayer<A> {
    pub fn new(authorizer: A) -> Self {
        Self { authorizer }
    }
}

impl<S, A> Layer<S> for AuthorizationLayer<A>
where
    A: Clone,
{
    type Service = AuthorizationService<S, A>;

    fn layer(&self, service: S) -> Self::Service {
        AuthorizationService::new(service, self.authorizer.clone())
    }
}

pub trait AuthorizationLayerExt: Sized + Authorizer {
    fn layer(self) -> AuthorizationLayer<Self>;
}

impl<T> AuthorizationLayerExt for T
where
    T: Sized + Authorizer + Clone,
{
    fn layer(self) -> AuthorizationLayer<Self> {
        AuthorizationLayer::new(self)
    }
}
