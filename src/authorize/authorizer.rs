use std::future::Future;

use tonic::metadata::MetadataMap;

pub trait Authorizer {
    type Authorized: Clone + Send + Sync + 'static;

    type Error;

    fn authorize(
        &self,
        metadata: &MetadataMap,
    ) -> impl Future<Output = Result<Self::Authorized, Self::Error>> + Send;
}

pub trait AuthorizerExt: Sized + Authorizer {
    fn map_err<Fn>(self, map_err: Fn) -> ErrorMap<Self, Fn>;
}

impl<T> AuthorizerExt for T
where
    T: Sized + Authorizer,
{
    fn map_err<Fn>(self, map_err: Fn) -> ErrorMap<Self, Fn> {
        ErrorMap::new(self, map_err)
    }
}

#[derive(Debug, Clone)]
pub struct ErrorMap<T, Fn> {
    inner: T,
    map_err: Fn,
}

impl<T, Fn> ErrorMap<T, Fn> {
    pub const fn new(inner: T, map_err: Fn) -> Self {
        Self { inner, map_err }
    }
}

impl<A, Fn, E> Authorizer for ErrorMap<A, Fn>
where
    A: Authorizer + Sync,
    Fn: FnOnce(A::Error) -> E + Copy + Sync,
{
    type Authorized = A::Authorized;

    type Error = E;

    #[tracing::instrument(skip_all)]
    async fn authorize(&self, metadata: &MetadataMap) -> Result<Self::Authorized, Self::Error> {
        self.inner
            .authorize(metadata)
            .await
            .map_err(|err| (self.map_err)(err))
    }
}
