use thiserror::Error;
use tonic::Status;

/// Fixed message for failed claims. Unknown keyphrase and wrong passcode
/// must produce the same user-visible outcome.
pub const OPAQUE_DENIAL: &str = "not found or invalid credentials";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store I/O error: {0}")]
    StoreIo(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    StoreSerde(#[from] serde_json::Error),

    #[error("not found or invalid credentials")]
    NotFoundOrUnauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Passcode hashing error: {0}")]
    Hashing(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            // Store failures are retryable; a share must never be reported
            // as created or absent when the store could not be reached.
            AppError::Database(e) => Status::unavailable(format!("Database error: {}", e)),
            AppError::StoreIo(e) => Status::unavailable(format!("Store I/O error: {}", e)),
            AppError::StoreSerde(e) => Status::unavailable(format!("Store error: {}", e)),
            AppError::NotFoundOrUnauthorized => Status::not_found(OPAQUE_DENIAL),
            AppError::NotFound(msg) => Status::not_found(msg),
            AppError::InvalidInput(msg) => Status::invalid_argument(msg),
            AppError::Hashing(msg) => Status::internal(format!("Passcode hashing error: {}", msg)),
            AppError::RateLimited => {
                Status::resource_exhausted("Rate limit exceeded, please try again later")
            }
            AppError::Internal(msg) => Status::internal(msg),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
