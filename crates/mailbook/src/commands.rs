//! Command execution against a mail store.

use std::io::Write;

use anyhow::{Context, bail};
use mailbook_core::{MailRecord, MailRepository, MailSettings, SelectKind, dispatch_select};
use tracing::info;

use crate::cli::Command;
use crate::render::TerminalBook;

/// Runs a mailbox command, printing its output to `out`.
pub async fn execute<W: Write>(
    command: Command,
    repo: &MailRepository,
    settings: &MailSettings,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Send {
            from,
            to,
            title,
            body,
            file,
        } => {
            let content = match (body, file) {
                (Some(body), _) => body,
                (None, Some(path)) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("reading mail body from {}", path.display()))?,
                (None, None) => String::new(),
            };

            let mut mail = MailRecord::new(from, to, title);
            mail.set_content(content);
            repo.send(&mail).await?;
            writeln!(out, "Sent mail {} to {}", mail.id(), mail.receiver())?;
        }
        Command::List { mailbox } => {
            let mails = repo.list(&mailbox).await?;
            let unread = repo.unread_count(&mailbox).await?;
            writeln!(out, "{mailbox}: {} mails, {unread} unread", mails.len())?;
            for mail in &mails {
                let marker = if mail.is_read() { ' ' } else { '*' };
                writeln!(
                    out,
                    "{marker} {} [{}] {}: {}",
                    mail.id(),
                    mail.category(),
                    mail.sender(),
                    mail.display_name(settings)?
                )?;
            }
        }
        Command::Read {
            mailbox,
            id,
            keep_unread,
        } => {
            let Some(mut mail) = repo.get(&mailbox, id).await? else {
                bail!("no mail {id} in mailbox {mailbox}");
            };
            let was_read = mail.is_read();

            let mut book = TerminalBook::new(&mut *out, settings, !keep_unread);
            dispatch_select(SelectKind::Primary, &mut mail, &mut book)?;

            if mail.is_read() != was_read {
                repo.set_read(&mailbox, id, mail.is_read()).await?;
                info!(%mailbox, %id, "mail marked as read");
            }
        }
        Command::Info { mailbox, id } => {
            let Some(mut mail) = repo.get(&mailbox, id).await? else {
                bail!("no mail {id} in mailbox {mailbox}");
            };
            let mut book = TerminalBook::new(&mut *out, settings, false);
            dispatch_select(SelectKind::Secondary, &mut mail, &mut book)?;
        }
        Command::Delete { mailbox, id } => {
            if !repo.delete(&mailbox, id).await? {
                bail!("no mail {id} in mailbox {mailbox}");
            }
            writeln!(out, "Deleted mail {id}")?;
        }
        Command::Feed => {
            for line in repo.public_feed().await? {
                writeln!(out, "{line}")?;
            }
        }
        Command::Config { .. } => bail!("config is handled before the store is opened"),
    }
    Ok(())
}
