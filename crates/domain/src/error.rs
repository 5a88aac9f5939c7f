#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("No connection to server: {0}")]
    NoConnection(String),
    #[error("Server returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl StorageError {
    #[must_use]
    pub fn is_no_connection(&self) -> bool {
        matches!(self, StorageError::NoConnection(_))
    }
}

impl ReadError {
    #[must_use]
    pub fn is_no_connection(&self) -> bool {
        matches!(self, ReadError::Storage(storage) if storage.is_no_connection())
    }
}

impl CreateError {
    #[must_use]
    pub fn is_no_connection(&self) -> bool {
        matches!(self, CreateError::Storage(storage) if storage.is_no_connection())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter duration and log at least one exercise.")]
    MissingFields,
    #[error("{0} is already in your workout log.")]
    AlreadyAdded(String),
}
