//! src/domain/mod.rs

mod new_waitlist_entry;
mod waitlist_email;
mod waitlist_name;

pub use new_waitlist_entry::NewWaitlistEntry;
pub use waitlist_email::WaitlistEmail;
pub use waitlist_name::WaitlistName;

/// Validation error for waitlist signup data.
///
/// The display strings are shown to the user as they are.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name and email are required")]
    MissingField,
    #[error("Please enter a valid email")]
    MalformedEmail(String),
}
