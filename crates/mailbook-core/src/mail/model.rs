//! Mail record model.

use super::category::MailCategory;
use super::id::{MailId, SystemClock, generate_id};

/// Receiver name that addresses the public board instead of a player.
pub const PUBLIC_RECEIVER: &str = "-Public";

/// A single mail.
///
/// Sender, receiver and title are fixed at creation. Category, content and
/// read state can change afterwards. A record has one owner; callers that
/// share one across tasks must serialize access themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct MailRecord {
    id: MailId,
    category: MailCategory,
    sender: String,
    receiver: String,
    title: String,
    content: String,
    read: bool,
}

impl MailRecord {
    /// Creates a new, empty mail stamped with the current time.
    ///
    /// The category is [`MailCategory::Public`] when `receiver` is
    /// [`PUBLIC_RECEIVER`], [`MailCategory::Private`] otherwise.
    #[must_use]
    pub fn new(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let id = generate_id(&SystemClock, &mut rand::thread_rng());
        Self::with_id(id, sender, receiver, title)
    }

    /// Creates a new, empty mail with an explicit id.
    #[must_use]
    pub fn with_id(
        id: MailId,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            id,
            MailCategory::Private,
            sender,
            receiver,
            title,
            String::new(),
        )
    }

    /// Creates a mail from all of its fields.
    ///
    /// A receiver of [`PUBLIC_RECEIVER`] overrides `category` with
    /// [`MailCategory::Public`].
    #[must_use]
    pub fn from_parts(
        id: MailId,
        category: MailCategory,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let receiver = receiver.into();
        let category = if receiver == PUBLIC_RECEIVER {
            MailCategory::Public
        } else {
            category
        };
        Self {
            id,
            category,
            sender: sender.into(),
            receiver,
            title: title.into(),
            content: content.into(),
            read: false,
        }
    }

    /// Builds a record exactly as stored, without the public-receiver rule.
    pub(crate) fn restore(
        id: MailId,
        category: MailCategory,
        sender: &str,
        receiver: &str,
        title: &str,
        content: &str,
    ) -> Self {
        Self {
            id,
            category,
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            read: false,
        }
    }

    /// Mail id.
    #[must_use]
    pub const fn id(&self) -> MailId {
        self.id
    }

    /// Current category.
    #[must_use]
    pub const fn category(&self) -> MailCategory {
        self.category
    }

    /// Sender name.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Receiver name, or [`PUBLIC_RECEIVER`].
    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the mail has been read.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.read
    }

    /// Returns true if the mail is addressed to the public board.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.receiver == PUBLIC_RECEIVER
    }

    /// Moves the mail to another category.
    pub const fn set_category(&mut self, category: MailCategory) {
        self.category = category;
    }

    /// Replaces the body text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Marks the mail as read or unread.
    pub const fn set_read(&mut self, read: bool) {
        self.read = read;
    }
}
