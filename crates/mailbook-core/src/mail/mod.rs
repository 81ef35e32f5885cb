//! Mail records, their wire format and their storage.
//!
//! A mail is addressed from one player to another, or to the public board
//! when the receiver is [`PUBLIC_RECEIVER`]. It is persisted as one flat
//! string (see [`DELIMITER`]) keyed by mailbox and [`MailId`].

mod category;
mod codec;
mod id;
mod model;
mod repository;

pub use category::MailCategory;
pub use codec::DELIMITER;
pub use id::{Clock, MailId, MockClock, SystemClock, generate_id};
pub use model::{MailRecord, PUBLIC_RECEIVER};
pub use repository::{MailRepository, PUBLIC_MAILBOX};
