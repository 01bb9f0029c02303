use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use http::{header::CONTENT_TYPE, HeaderValue, Request, Response};
use tonic::{metadata::MetadataMap, Status};
use tower::Service;

use crate::authorize::{authorizer::Authorizer, extract::SealedAuthorized};

/// Authorizes every incoming call before handing it to the wrapped service.
///
/// Accepted calls carry the authorized data as a request extension, readable
/// through [`AuthorizedExt`](crate::authorize::extract::AuthorizedExt).
/// Rejected calls are answered directly with the grpc status of the error and
/// never reach the wrapped service.
#[derive(Debug, Clone)]
pub struct AuthorizationService<S, A> {
    service: S,
    authorizer: A,
}

impl<S, A> AuthorizationService<S, A> {
    pub fn new(service: S, authorizer: A) -> Self {
        Self {
            service,
            authorizer,
        }
    }
}

impl<S, A, B, ResBody> Service<Request<B>> for AuthorizationService<S, A>
where
    A: Authorizer + Clone + Send + 'static,
    A::Error: Into<Status>,
    S: Service<Request<B>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ResBody: Default,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        let mut service = self.service.clone();
        let authorizer = self.authorizer.clone();

        Box::pin(async move {
            let metadata = MetadataMap::from_headers(std::mem::take(request.headers_mut()));

            let authorized = match authorizer.authorize(&metadata).await {
                Ok(authorized) => authorized,
                Err(err) => return Ok(rejection_response(err.into())),
            };

            *request.headers_mut() = metadata.into_headers();

            request.extensions_mut().insert(SealedAuthorized(authorized));

            service.call(request).await
        })
    }
}

/// Trailers-only grpc response, the shape tonic answers with when a call is
/// refused before reaching a service.
fn rejection_response<ResBody>(status: Status) -> Response<ResBody>
where
    ResBody: Default,
{
    let mut response = Response::new(ResBody::default());

    if let Err(err) = status.add_header(response.headers_mut()) {
        tracing::error!(err = %err, "Failed to encode the rejection status");
    }

    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/grpc"));

    response
}
