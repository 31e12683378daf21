//! src/domain/waitlist_email.rs

use crate::domain::ValidationError;

/// Email address of a waitlist entry.
///
/// Only the presence of an `@` is checked, uniqueness is left to the database.
#[derive(Debug, Clone)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(s: String) -> Result<WaitlistEmail, ValidationError> {
        if s.is_empty() {
            Err(ValidationError::MissingField)
        } else if !s.contains('@') {
            Err(ValidationError::MalformedEmail(s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
