use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreloadError {
    #[error("invalid environment variable name: {0:?}")]
    InvalidName(String),
    #[error("unsetenv {name} failed: {source}")]
    Os {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
