//! src/error.rs

use crate::domain::ValidationError;
use crate::storage::InsertError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

pub type WaitlistResult<T> = Result<T, Error>;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Failure of a waitlist signup.
///
/// The display string of each variant is the message returned to the client.
#[derive(thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Email already registered")]
    DuplicateEntryError(#[source] sqlx::Error),
    #[error("Failed to save data")]
    StorageError(#[source] sqlx::Error),
    #[error("Internal server error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<InsertError> for Error {
    fn from(err: InsertError) -> Self {
        match err {
            InsertError::DuplicateEmail(e) => Error::DuplicateEntryError(e),
            InsertError::Storage(e) => Error::StorageError(e),
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::ValidationError(_) | Error::DuplicateEntryError(_) => StatusCode::BAD_REQUEST,
            Error::StorageError(_) | Error::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
