//! Terminal rendering of mail books.

use std::io::Write;

use mailbook_core::{
    MailDisplay, MailPreview, MailRecord, MailSelectHandler, MailSettings, Result, open_preview,
};

/// Prints books to a writer, one framed block per page.
pub struct TerminalBook<'a, W> {
    out: W,
    settings: &'a MailSettings,
    mark_read: bool,
}

impl<'a, W: Write> TerminalBook<'a, W> {
    pub const fn new(out: W, settings: &'a MailSettings, mark_read: bool) -> Self {
        Self {
            out,
            settings,
            mark_read,
        }
    }
}

impl<W: Write> MailDisplay for TerminalBook<'_, W> {
    fn open_book(&mut self, preview: &MailPreview) -> Result<()> {
        writeln!(self.out, "{} by {}", preview.title(), preview.author())?;
        let total = preview.page_count();
        for (index, page) in preview.pages().iter().enumerate() {
            writeln!(self.out, "--- page {}/{total} ---", index + 1)?;
            writeln!(self.out, "{page}")?;
        }
        Ok(())
    }
}

impl<W: Write> MailSelectHandler for TerminalBook<'_, W> {
    fn on_select(&mut self, mail: &mut MailRecord) -> Result<()> {
        let settings = self.settings;
        let mark_read = self.mark_read;
        if !open_preview(mail, settings, self, mark_read)? {
            writeln!(self.out, "(this mail is empty)")?;
        }
        Ok(())
    }

    fn on_secondary_select(&mut self, mail: &mut MailRecord) -> Result<()> {
        let pages = mail
            .preview(self.settings)?
            .map_or(0, |preview| preview.page_count());

        writeln!(self.out, "id:       {}", mail.id())?;
        writeln!(self.out, "category: {}", mail.category().display_name())?;
        writeln!(self.out, "from:     {}", mail.sender())?;
        writeln!(self.out, "to:       {}", mail.receiver())?;
        writeln!(self.out, "title:    {}", mail.display_name(self.settings)?)?;
        writeln!(self.out, "read:     {}", if mail.is_read() { "yes" } else { "no" })?;
        writeln!(self.out, "pages:    {pages}")?;
        Ok(())
    }
}
