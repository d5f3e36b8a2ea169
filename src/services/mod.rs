pub mod env_diff;
pub mod validator;

pub use env_diff::EnvironmentDiff;
pub use validator::{ConfigValidator, LOAD_FAILURE_KEY, MIN_SECURE_LENGTH};
