#![deny(unsafe_code, missing_debug_implementations)]

//! Composable api key authorization for [tonic](https://docs.rs/tonic/latest/tonic/) services,
//! built on top of [tower](https://docs.rs/tower/latest/tower/).
//!
//! Incoming calls carry an `authorization` metadata value of the form
//! `<key field> <api key>`. The middleware extracts the api key, matching the
//! key field case-insensitively, and passes it to a
//! [`KeyValidator`](authorize::validate::KeyValidator). Accepted calls reach
//! the wrapped service with the authorized data attached. Everything else is
//! answered with a configurable grpc status and never reaches the service.
//!
//! ```rust
//! use tonic::Status;
//! use tonic_apikey::{
//!     authorize::{
//!         authorizers::api_key::{ApiKey, ApiKeyAuthorizer},
//!         validate::validator_fn,
//!     },
//!     extension::AuthorizationLayerExt,
//!     reject::Rejection,
//! };
//!
//! let authorizer = ApiKeyAuthorizer::new(validator_fn(|api_key: ApiKey| async move {
//!     if api_key == "secret" {
//!         return Ok(api_key);
//!     }
//!
//!     Err(Status::unauthenticated("Unknown api key"))
//! }))
//! .rejection(Rejection::message("Not Authorized"));
//!
//! let layer = authorizer.layer();
//! # let _ = layer;
//! ```

pub mod authorize;
pub mod config;
pub mod extension;
pub mod intercept;
pub mod reject;

#[cfg(test)]
mod test;
