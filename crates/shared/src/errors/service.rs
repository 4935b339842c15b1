use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No active session")]
    NoActiveSession,

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Invalid navigation registry: {0:?}")]
    InvalidRegistry(Vec<String>),
}
