mod error;
mod service;

pub use self::error::ErrorResponse;
pub use self::service::ServiceError;
