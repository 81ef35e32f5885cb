//! Flat string encoding of mail records.
//!
//! A record is stored as
//!
//! ```text
//! tag§§sender§§receiver§§title§§content
//! ```
//!
//! with the id carried separately as the storage key, or prepended as
//! `id§§...` when both have to travel together. The content is the last
//! field, so it may contain the delimiter itself; the other fields may not.
//! Changing [`DELIMITER`] invalidates every stored record.

use tracing::debug;

use super::category::MailCategory;
use super::id::MailId;
use super::model::MailRecord;
use crate::{Error, Result};

/// Separator between serialized fields.
pub const DELIMITER: &str = "§§";

/// Fields in a payload without the id.
const FIELD_COUNT: usize = 5;

impl MailRecord {
    /// Encodes the record without its id.
    ///
    /// The read flag is not part of the payload. Content may contain the
    /// delimiter; the other fields must not, or they will not decode back.
    #[must_use]
    pub fn serialize(&self) -> String {
        [
            self.category().tag(),
            self.sender(),
            self.receiver(),
            self.title(),
            self.content(),
        ]
        .join(DELIMITER)
    }

    /// Encodes the record with its id as the leading field.
    #[must_use]
    pub fn serialize_with_id(&self) -> String {
        format!("{}{DELIMITER}{}", self.id(), self.serialize())
    }

    /// Decodes a payload produced by [`MailRecord::serialize`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] if the payload has fewer than five
    /// fields, or [`Error::UnknownCategory`] if the category tag is not known.
    pub fn deserialize(id: MailId, payload: &str) -> Result<Self> {
        let fields: Vec<&str> = payload.splitn(FIELD_COUNT, DELIMITER).collect();
        let [tag, sender, receiver, title, content] = fields[..] else {
            debug!(%id, found = fields.len(), "rejecting malformed mail payload");
            return Err(Error::MalformedRecord {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        };

        let category: MailCategory = tag.parse()?;
        Ok(Self::restore(id, category, sender, receiver, title, content))
    }

    /// Decodes a line produced by [`MailRecord::serialize_with_id`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the leading id is not a number, and
    /// otherwise the same errors as [`MailRecord::deserialize`].
    pub fn deserialize_with_id(line: &str) -> Result<Self> {
        let Some((id, payload)) = line.split_once(DELIMITER) else {
            return Err(Error::MalformedRecord {
                expected: FIELD_COUNT + 1,
                found: 1,
            });
        };
        let id: MailId = id.parse()?;
        Self::deserialize(id, payload)
    }
}
