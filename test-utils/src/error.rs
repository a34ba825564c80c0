use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or write a seed file into it.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
