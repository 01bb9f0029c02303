use std::ops::Deref;

/// This struct can only be created by [`AuthorizationService`](crate::extension::AuthorizationService).
///
/// Use [`AuthorizedExt`](super::authorized_ext::AuthorizedExt) to extract the data produced by a successful authorization.
///
/// Because [`AuthorizedExt`](super::authorized_ext::AuthorizedExt) extracts only [`SealedAuthorized`] data and [`SealedAuthorized`] can only be created by [`AuthorizationService`](crate::extension::AuthorizationService),
/// it is safe to assume that the data has been produced by an authorizer and not been created by arbitrary code.
#[derive(Debug, Clone)]
pub struct SealedAuthorized<T>(pub(crate) T);

impl<T> SealedAuthorized<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for SealedAuthorized<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
