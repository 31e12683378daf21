//! src/domain/waitlist_name.rs

use crate::domain::ValidationError;

#[derive(Debug, Clone)]
pub struct WaitlistName(String);

impl WaitlistName {
    /// Returns an instance of `WaitlistName` if the input is not empty.
    ///
    /// Whitespace is kept as it is, any non-empty name is accepted.
    pub fn parse(s: String) -> Result<WaitlistName, ValidationError> {
        if s.is_empty() {
            Err(ValidationError::MissingField)
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for WaitlistName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
