//! Mailbox categories and their one-character wire tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Which view of the mailbox a mail belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MailCategory {
    /// Addressed to a single player.
    #[default]
    Private,
    /// Posted to the public board.
    Public,
    /// The sender's own copy of a mail they sent.
    Sent,
}

impl MailCategory {
    /// All categories, in declaration order.
    pub const ALL: [Self; 3] = [Self::Private, Self::Public, Self::Sent];

    /// Looks up a category by its wire tag (case-sensitive).
    ///
    /// Returns `None` when no category uses `tag`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.tag() == tag)
    }

    /// Wire tag used in the serialized record.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Private => "p",
            Self::Public => "P",
            Self::Sent => "s",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::Public => "Public",
            Self::Sent => "Sent",
        }
    }
}

impl fmt::Display for MailCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MailCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
