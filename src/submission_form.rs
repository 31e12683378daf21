//! src/submission_form.rs
//!
//! State of the waitlist signup form on the client side.
//!
//! The form goes `Idle -> Submitting -> Succeeded | Failed`. `Succeeded` and
//! `Failed` are idle states which carry the message shown to the user. The
//! fields can't be edited and no second request can be started while a
//! submission is in flight.

use crate::waitlist_client::{SignupRequest, SignupResponse, WaitlistClient};

pub const SUCCESS_MESSAGE: &str = "Successfully joined the waitlist! We'll be in touch soon.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A submission is already in flight.")]
    InFlight,
    #[error("Name and email must be filled in.")]
    MissingField,
}

#[derive(Debug, Default)]
pub struct SubmissionForm {
    name: String,
    email: String,
    status: SubmissionStatus,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// message of the last finished submission
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Succeeded(m) | SubmissionStatus::Failed(m) => Some(m.as_str()),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Returns false and leaves the field untouched while submitting.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.name = name.into();
        true
    }

    /// Returns false and leaves the field untouched while submitting.
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.email = email.into();
        true
    }

    /// Enter `Submitting` and hand out the request to send.
    pub fn start(&mut self) -> Result<SignupRequest, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        // required fields
        if self.name.is_empty() || self.email.is_empty() {
            return Err(SubmitRejected::MissingField);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }

    /// Leave `Submitting` with the outcome of the request.
    pub fn complete(&mut self, outcome: Result<SignupResponse, reqwest::Error>) {
        if !self.is_submitting() {
            tracing::warn!("Ignoring the outcome of a submission which is not in flight");
            return;
        }
        self.status = match outcome {
            Ok(response) if response.is_success() => {
                self.name.clear();
                self.email.clear();
                SubmissionStatus::Succeeded(SUCCESS_MESSAGE.to_owned())
            }
            Ok(response) => {
                let message = response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned());
                SubmissionStatus::Failed(message)
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Waitlist signup request failed"
                );
                SubmissionStatus::Failed(NETWORK_ERROR_MESSAGE.to_owned())
            }
        };
    }

    /// Run one submission from start to finish.
    pub async fn submit(&mut self, client: &WaitlistClient) -> Result<(), SubmitRejected> {
        let request = self.start()?;
        let outcome = client.join(&request).await;
        self.complete(outcome);
        Ok(())
    }
}
