//! Mail previews.
//!
//! A preview is what a player sees when opening a mail: a book whose first
//! page starts with a header rendered from [`MailSettings::header_template`]
//! and whose pages carry the reflowed body. Building it is pure; showing it
//! is left to a [`MailDisplay`].

mod timestamp;

use tracing::debug;

pub use timestamp::format_timestamp;
pub(crate) use timestamp::{parse_pattern, parse_zone};

use crate::mail::MailRecord;
use crate::paginate::{Page, paginate, split_body};
use crate::settings::MailSettings;
use crate::Result;

/// Header placeholder replaced with the sender name.
pub const SENDER_PLACEHOLDER: &str = "%sender%";
/// Header placeholder replaced with the title.
pub const TITLE_PLACEHOLDER: &str = "%title%";
/// Header placeholder replaced with the formatted timestamp.
pub const TIMESTAMP_PLACEHOLDER: &str = "%timestamp%";

/// Splits a rendered header into lines on `\n` or `\r\n`.
///
/// Trailing empty lines are dropped. An empty header is one empty line.
fn header_lines(header: &str) -> Vec<&str> {
    if header.is_empty() {
        return vec![""];
    }
    let mut lines = split_body(header);
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// A mail laid out as a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailPreview {
    author: String,
    title: String,
    pages: Vec<Page>,
}

impl MailPreview {
    /// Book author (the mail sender).
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Book title (the mail title).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Pages in reading order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl MailRecord {
    /// Renders the header template for this mail.
    ///
    /// Placeholders are substituted in order: sender, title, timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn header(&self, settings: &MailSettings) -> Result<String> {
        let timestamp = format_timestamp(
            self.id(),
            &settings.timestamp_zone,
            &settings.timestamp_format,
        )?;
        Ok(settings
            .header_template
            .replace(SENDER_PLACEHOLDER, self.sender())
            .replace(TITLE_PLACEHOLDER, self.title())
            .replace(TIMESTAMP_PLACEHOLDER, &timestamp))
    }

    /// Lays the mail out as a book.
    ///
    /// Returns `None` for a mail without content: there is nothing to read,
    /// so no book is produced at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn preview(&self, settings: &MailSettings) -> Result<Option<MailPreview>> {
        if self.content().is_empty() {
            return Ok(None);
        }

        let header = self.header(settings)?;
        let pages = paginate(settings.layout, header_lines(&header), self.content());

        Ok(Some(MailPreview {
            author: self.sender().to_string(),
            title: self.title().to_string(),
            pages,
        }))
    }

    /// Short label for mailbox listings: the title followed by the timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn display_name(&self, settings: &MailSettings) -> Result<String> {
        let timestamp = format_timestamp(
            self.id(),
            &settings.timestamp_zone,
            &settings.timestamp_format,
        )?;
        Ok(format!("{} {timestamp}", self.title()))
    }
}

/// Presents previews to a reader.
pub trait MailDisplay {
    /// Shows the book.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Render`] (or any other error) if the book
    /// could not be shown.
    fn open_book(&mut self, preview: &MailPreview) -> Result<()>;

    /// Called after the book was shown, with the read state requested by
    /// the caller. The default does nothing.
    ///
    /// # Errors
    ///
    /// Implementations that persist the read state return their storage
    /// errors here.
    fn mail_opened(&mut self, _mail: &MailRecord, _mark_read: bool) -> Result<()> {
        Ok(())
    }
}

/// Builds the preview of `mail` and hands it to `display`.
///
/// When `mark_read` is set, the mail is flagged as read once the book was
/// shown. Returns false without touching `display` if the mail has no
/// content.
///
/// # Errors
///
/// Returns an error if the preview cannot be built or `display` fails.
pub fn open_preview<D>(
    mail: &mut MailRecord,
    settings: &MailSettings,
    display: &mut D,
    mark_read: bool,
) -> Result<bool>
where
    D: MailDisplay + ?Sized,
{
    let Some(preview) = mail.preview(settings)? else {
        debug!(id = %mail.id(), "mail has no content, preview suppressed");
        return Ok(false);
    };

    display.open_book(&preview)?;
    if mark_read {
        mail.set_read(true);
    }
    display.mail_opened(mail, mark_read)?;

    debug!(id = %mail.id(), pages = preview.page_count(), "preview opened");
    Ok(true)
}

/// How a mail entry was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKind {
    /// Main action (open the mail).
    Primary,
    /// Alternate action (mail options).
    Secondary,
}

/// Reacts to a mail entry being selected.
pub trait MailSelectHandler {
    /// Primary selection.
    ///
    /// # Errors
    ///
    /// Returns whatever error the handler's action produces.
    fn on_select(&mut self, mail: &mut MailRecord) -> Result<()>;

    /// Secondary selection.
    ///
    /// # Errors
    ///
    /// Returns whatever error the handler's action produces.
    fn on_secondary_select(&mut self, mail: &mut MailRecord) -> Result<()>;
}

/// Routes a selection to the matching handler method.
///
/// # Errors
///
/// Returns the handler's error.
pub fn dispatch_select<H>(kind: SelectKind, mail: &mut MailRecord, handler: &mut H) -> Result<()>
where
    H: MailSelectHandler + ?Sized,
{
    match kind {
        SelectKind::Primary => handler.on_select(mail),
        SelectKind::Secondary => handler.on_secondary_select(mail),
    }
}
