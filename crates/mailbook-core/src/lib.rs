//! # mailbook-core
//!
//! Core logic for in-game mail that is read as a paged book.
//!
//! This crate provides:
//! - Mail records and their flat `§§`-delimited wire format
//! - Book pagination: reflowing a header and a body into bounded pages
//! - Preview construction (header template, timestamps, pages)
//! - Settings persisted as JSON
//! - A `SQLite` mail store keyed by mailbox and id
//!
//! ## Example
//!
//! ```
//! use mailbook_core::{MailRecord, MailSettings};
//!
//! # fn main() -> mailbook_core::Result<()> {
//! let mut mail = MailRecord::new("Alice", "Bob", "Hi");
//! mail.set_content("Hello\nWorld");
//!
//! let payload = mail.serialize();
//! let copy = MailRecord::deserialize(mail.id(), &payload)?;
//! assert_eq!(copy, mail);
//!
//! if let Some(preview) = mail.preview(&MailSettings::default())? {
//!     for page in preview.pages() {
//!         println!("{page}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod mail;
pub mod paginate;
pub mod preview;
pub mod settings;

#[cfg(test)]
mod proptests;

pub use error::{Error, Result};
pub use mail::{
    Clock, DELIMITER, MailCategory, MailId, MailRecord, MailRepository, MockClock,
    PUBLIC_MAILBOX, PUBLIC_RECEIVER, SystemClock, generate_id,
};
pub use paginate::{Line, Page, PageLayout, join_body, paginate};
pub use preview::{
    MailDisplay, MailPreview, MailSelectHandler, SelectKind, dispatch_select, format_timestamp,
    open_preview,
};
pub use settings::MailSettings;
