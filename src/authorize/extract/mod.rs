mod authorized;
mod authorized_ext;
mod sealed_authorized;

pub use authorized::Authorized;
pub use authorized_ext::{AuthorizedExt, MissingAuthorized};
pub use sealed_authorized::SealedAuthorized;
