use std::{borrow::Cow, fmt, sync::Arc};

use tonic::{metadata::MetadataMap, Code, Status};

/// Message used when no rejection message is configured.
pub const DEFAULT_MESSAGE: &str = "Not Authorized";

/// The grpc status answered for calls that fail authorization.
///
/// Resolved once at configuration time. Every rejected call goes through the
/// same [`Status`] construction path, so the wrapped service never observes
/// the call.
#[derive(Clone)]
pub enum Rejection {
    /// [`Code::Unauthenticated`] with a fixed message.
    Message(Cow<'static, str>),
    /// Full control over code, message and metadata returned to the caller.
    Descriptor(RejectionDescriptor),
    /// Builds the [`Status`] from the metadata of the rejected call.
    Factory(Arc<dyn Fn(&MetadataMap) -> Status + Send + Sync>),
}

impl Rejection {
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Message(message.into())
    }

    pub fn descriptor(descriptor: RejectionDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }

    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&MetadataMap) -> Status + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(factory))
    }

    /// The status answered to the caller, given the metadata of the rejected
    /// call.
    pub fn status(&self, metadata: &MetadataMap) -> Status {
        match self {
            Self::Message(message) => Status::unauthenticated(message.as_ref()),
            Self::Descriptor(descriptor) => descriptor.status(),
            Self::Factory(factory) => factory(metadata),
        }
    }
}

impl Default for Rejection {
    fn default() -> Self {
        Self::Message(Cow::Borrowed(DEFAULT_MESSAGE))
    }
}

impl fmt::Debug for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Descriptor(descriptor) => f.debug_tuple("Descriptor").field(descriptor).finish(),
            Self::Factory(_) => f.debug_tuple("Factory").field(&"...").finish(),
        }
    }
}

/// Rejection with an explicit grpc code and metadata attached for the caller
/// to inspect.
///
/// An omitted message falls back to [`DEFAULT_MESSAGE`].
#[derive(Debug, Clone)]
pub struct RejectionDescriptor {
    message: Option<Cow<'static, str>>,
    code: Code,
    metadata: MetadataMap,
}

impl RejectionDescriptor {
    pub fn new() -> Self {
        Self {
            message: None,
            code: Code::Unauthenticated,
            metadata: MetadataMap::new(),
        }
    }

    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn code(mut self, code: Code) -> Self {
        self.code = code;
        self
    }

    pub fn metadata(mut self, metadata: MetadataMap) -> Self {
        self.metadata = metadata;
        self
    }

    fn status(&self) -> Status {
        let message = self.message.as_deref().unwrap_or(DEFAULT_MESSAGE);

        Status::with_metadata(self.code, message, self.metadata.clone())
    }
}

impl Default for RejectionDescriptor {
    fn default() -> Self {
        Self::new()
    }
}
