//! src/storage.rs

use sqlx::postgres::PgDatabaseError;
use sqlx::PgPool;

use crate::domain::NewWaitlistEntry;
use crate::error::error_chain_fmt;

const WAITLIST_TABLE: &str = "waitlist";
const WAITLIST_EMAIL_CONSTRAINT: &str = "waitlist_email_key";

#[derive(thiserror::Error)]
pub enum InsertError {
    #[error("The email is already on the waitlist.")]
    DuplicateEmail(#[source] sqlx::Error),
    #[error("Failed to insert the waitlist entry.")]
    Storage(#[source] sqlx::Error),
}

impl std::fmt::Debug for InsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<sqlx::Error> for InsertError {
    fn from(err: sqlx::Error) -> Self {
        if is_email_registered_twice_err(&err) {
            InsertError::DuplicateEmail(err)
        } else {
            InsertError::Storage(err)
        }
    }
}

/// Checks if err results from trying to register the same email twice
fn is_email_registered_twice_err(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        // SQLSTATE 23505
        if db_err.is_unique_violation() {
            if let Some(pg_err) = db_err.try_downcast_ref::<PgDatabaseError>() {
                if let Some(table) = pg_err.table() {
                    if table == WAITLIST_TABLE {
                        if let Some(constraint) = pg_err.constraint() {
                            return constraint == WAITLIST_EMAIL_CONSTRAINT;
                        }
                    }
                }
            }
        }
    }
    false
}

#[tracing::instrument(
    name = "Saving new waitlist entry in the database.",
    skip(new_entry, pool)
)]
pub async fn insert_waitlist_entry(
    pool: &PgPool,
    new_entry: &NewWaitlistEntry,
) -> Result<(), InsertError> {
    // id and created_at are filled in by the database
    sqlx::query(r#"INSERT INTO waitlist (name, email) VALUES ($1, $2)"#)
        .bind(new_entry.name.as_ref())
        .bind(new_entry.email.as_ref())
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            InsertError::from(e)
        })?;
    Ok(())
}
