//! Page dimensions.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default maximum number of lines on a page.
pub const DEFAULT_PAGE_LINES: usize = 14;

/// Default maximum number of characters on a line.
pub const DEFAULT_LINE_LENGTH: usize = 19;

/// Page dimensions used to reflow a mail.
///
/// Both limits are at least one; a zero limit is rejected on construction
/// and on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutFields", into = "LayoutFields")]
pub struct PageLayout {
    page_lines: usize,
    line_length: usize,
}

impl PageLayout {
    /// Creates a layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if either limit is zero.
    pub fn new(page_lines: usize, line_length: usize) -> Result<Self> {
        if page_lines == 0 {
            return Err(Error::InvalidLayout(
                "a page must hold at least one line".to_string(),
            ));
        }
        if line_length == 0 {
            return Err(Error::InvalidLayout(
                "a line must hold at least one character".to_string(),
            ));
        }
        Ok(Self {
            page_lines,
            line_length,
        })
    }

    /// Maximum number of lines on a page.
    #[must_use]
    pub const fn page_lines(&self) -> usize {
        self.page_lines
    }

    /// Maximum number of characters on a line.
    #[must_use]
    pub const fn line_length(&self) -> usize {
        self.line_length
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_lines: DEFAULT_PAGE_LINES,
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

/// Unchecked form of [`PageLayout`] as it appears in settings files.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct LayoutFields {
    page_lines: usize,
    line_length: usize,
}

impl Default for LayoutFields {
    fn default() -> Self {
        PageLayout::default().into()
    }
}

impl From<PageLayout> for LayoutFields {
    fn from(layout: PageLayout) -> Self {
        Self {
            page_lines: layout.page_lines,
            line_length: layout.line_length,
        }
    }
}

impl TryFrom<LayoutFields> for PageLayout {
    type Error = Error;

    fn try_from(fields: LayoutFields) -> Result<Self> {
        Self::new(fields.page_lines, fields.line_length)
    }
}
