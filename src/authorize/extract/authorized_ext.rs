use tonic::Status;

use super::{authorized::Authorized, sealed_authorized::SealedAuthorized};

/// Read the authorized data attached to a request by
/// [`AuthorizationService`](crate::extension::AuthorizationService).
pub trait AuthorizedExt {
    fn authorized<T>(&self) -> Result<Authorized<T>, MissingAuthorized>
    where
        T: Clone + Send + Sync + 'static;
}

impl<B> AuthorizedExt for tonic::Request<B> {
    fn authorized<T>(&self) -> Result<Authorized<T>, MissingAuthorized>
    where
        T: Clone + Send + Sync + 'static,
    {
        from_extension(self.extensions().get::<SealedAuthorized<T>>())
    }
}

impl<B> AuthorizedExt for http::Request<B> {
    fn authorized<T>(&self) -> Result<Authorized<T>, MissingAuthorized>
    where
        T: Clone + Send + Sync + 'static,
    {
        from_extension(self.extensions().get::<SealedAuthorized<T>>())
    }
}

fn from_extension<T>(
    sealed: Option<&SealedAuthorized<T>>,
) -> Result<Authorized<T>, MissingAuthorized>
where
    T: Clone,
{
    match sealed {
        Some(SealedAuthorized(authorized)) => Ok(Authorized(authorized.clone())),
        None => {
            tracing::error!(
                "Requested authorized extension was not found. Did you use an `Authorizer` with `AuthorizationLayer`?"
            );

            Err(MissingAuthorized)
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Authorized extension not found")]
pub struct MissingAuthorized;

impl From<MissingAuthorized> for Status {
    fn from(err: MissingAuthorized) -> Self {
        Status::internal(err.to_string())
    }
}
