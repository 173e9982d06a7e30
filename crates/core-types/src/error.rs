use thiserror::Error;

/// A boxed error coming from whatever backend sits behind a repository.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage failure: {0}")]
    Storage(#[source] BoxError),
}

impl CoreError {
    /// Wraps any backend error as a storage failure.
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CoreError::Storage(Box::new(err))
    }
}
