//! src/domain/new_waitlist_entry.rs

use crate::domain::WaitlistEmail;
use crate::domain::WaitlistName;

#[derive(Debug)]
pub struct NewWaitlistEntry {
    pub email: WaitlistEmail,
    pub name: WaitlistName,
}
