pub mod authorizer;
pub mod authorizers;
pub mod extract;
pub mod metadata;
pub mod validate;
