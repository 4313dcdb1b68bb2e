pub mod env;
pub mod error;

pub use env::{sanitize_env, scrub_preload, unset_var, PRELOAD_VAR, PRELOAD_VARS};
pub use error::PreloadError;
