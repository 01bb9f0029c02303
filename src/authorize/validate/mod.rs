mod key_validator;

pub use key_validator::{validator_fn, KeyValidator, ValidatorFn};
