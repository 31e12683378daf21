//! src/routes/waitlist/post.rs

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::PgPool;

use crate::domain::{NewWaitlistEntry, ValidationError, WaitlistEmail, WaitlistName};
use crate::error::{Error, WaitlistResult};
use crate::storage::insert_waitlist_entry;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Thanks for joining! We'll be in touch soon.";

/// Request body of `POST /waitlist`.
///
/// Both fields are optional here, absence is reported as a validation error.
#[derive(serde::Deserialize, Debug)]
pub struct SignupData {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(serde::Serialize)]
struct SignupConfirmation {
    message: &'static str,
}

impl TryFrom<SignupData> for NewWaitlistEntry {
    type Error = ValidationError;

    fn try_from(value: SignupData) -> Result<Self, Self::Error> {
        // name is checked first, a missing name wins over a malformed email
        let name = WaitlistName::parse(value.name.unwrap_or_default())?;
        let email = WaitlistEmail::parse(value.email.unwrap_or_default())?;
        Ok(Self { email, name })
    }
}

#[tracing::instrument(
    name = "Adding a new waitlist entry.",
    skip(body, pool),
    fields(
        entry_email = ?body.email,
        entry_name = ?body.name
    )
)]
pub async fn join_waitlist(
    body: web::Json<SignupData>,
    pool: web::Data<PgPool>,
) -> WaitlistResult<HttpResponse> {
    let new_entry: NewWaitlistEntry = body.into_inner().try_into()?;
    insert_waitlist_entry(pool.as_ref(), &new_entry).await?;
    tracing::info!(
        "Successfully saved waitlist entry: {} - {}",
        new_entry.name.as_ref(),
        new_entry.email
    );
    Ok(HttpResponse::Created().json(SignupConfirmation {
        message: SIGNUP_SUCCESS_MESSAGE,
    }))
}

/// Turns a body that could not be read or deserialized into an unexpected error.
pub fn signup_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::from(anyhow::anyhow!(
        "Failed to parse the waitlist signup request body: {}",
        err
    ))
    .into()
}
