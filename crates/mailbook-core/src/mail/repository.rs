//! Mail storage repository.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info, warn};

use super::category::MailCategory;
use super::id::MailId;
use super::model::{MailRecord, PUBLIC_RECEIVER};
use crate::Result;

/// Mailbox holding mails addressed to the public board.
pub const PUBLIC_MAILBOX: &str = PUBLIC_RECEIVER;

/// Repository for mail storage and retrieval.
///
/// Mails are keyed by `(mailbox, id)`. The value is the record's
/// [`MailRecord::serialize`] payload; the read flag is kept beside it.
pub struct MailRepository {
    pool: SqlitePool,
}

impl MailRepository {
    /// Create a new repository with the given database path.
    ///
    /// Creates the database and tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Create an in-memory repository for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Initialize database schema.
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS mails (
                mailbox TEXT NOT NULL,
                id REAL NOT NULL,
                payload TEXT NOT NULL,
                read INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (mailbox, id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store a mail in a mailbox, replacing any mail with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn store(&self, mailbox: &str, mail: &MailRecord) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO mails (mailbox, id, payload, read)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(mailbox, id) DO UPDATE SET
                payload = excluded.payload,
                read = excluded.read
            ",
        )
        .bind(mailbox)
        .bind(mail.id().value())
        .bind(mail.serialize())
        .bind(mail.is_read())
        .execute(&self.pool)
        .await?;

        debug!(mailbox, id = %mail.id(), "stored mail");
        Ok(())
    }

    /// Deliver a mail.
    ///
    /// The mail goes to the receiver's mailbox (the public board for
    /// [`PUBLIC_RECEIVER`]) and a read copy categorized as
    /// [`MailCategory::Sent`] goes to the sender's mailbox. A mail sent to
    /// oneself shares the key of its copy, so only the delivered mail is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn send(&self, mail: &MailRecord) -> Result<()> {
        self.store(mail.receiver(), mail).await?;

        if mail.sender() != mail.receiver() {
            let mut sent = mail.clone();
            sent.set_category(MailCategory::Sent);
            sent.set_read(true);
            self.store(mail.sender(), &sent).await?;
        }

        info!(
            sender = mail.sender(),
            receiver = mail.receiver(),
            id = %mail.id(),
            "mail sent"
        );
        Ok(())
    }

    /// Get a single mail.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the stored payload
    /// cannot be decoded.
    pub async fn get(&self, mailbox: &str, id: MailId) -> Result<Option<MailRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, payload, read
            FROM mails
            WHERE mailbox = ? AND id = ?
            ",
        )
        .bind(mailbox)
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let payload: String = row.get("payload");
        let mut mail = MailRecord::deserialize(id, &payload)?;
        mail.set_read(row.get("read"));
        Ok(Some(mail))
    }

    /// List the mails of a mailbox, newest first.
    ///
    /// Rows whose payload cannot be decoded are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, mailbox: &str) -> Result<Vec<MailRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, payload, read
            FROM mails
            WHERE mailbox = ?
            ORDER BY id DESC
            ",
        )
        .bind(mailbox)
        .fetch_all(&self.pool)
        .await?;

        let mails = rows
            .iter()
            .filter_map(|row| {
                let id = MailId::new(row.get("id"));
                let payload: String = row.get("payload");
                match MailRecord::deserialize(id, &payload) {
                    Ok(mut mail) => {
                        mail.set_read(row.get("read"));
                        Some(mail)
                    }
                    Err(e) => {
                        warn!(mailbox, %id, error = %e, "skipping unreadable mail");
                        None
                    }
                }
            })
            .collect();

        Ok(mails)
    }

    /// Public board entries in the `id§§payload` form.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn public_feed(&self) -> Result<Vec<String>> {
        let mails = self.list(PUBLIC_MAILBOX).await?;
        Ok(mails.iter().map(MailRecord::serialize_with_id).collect())
    }

    /// Mark a mail as read or unread.
    ///
    /// Returns false if no such mail exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn set_read(&self, mailbox: &str, id: MailId, read: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE mails SET read = ? WHERE mailbox = ? AND id = ?")
            .bind(read)
            .bind(mailbox)
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a mail.
    ///
    /// Returns false if no such mail exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(&self, mailbox: &str, id: MailId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM mails WHERE mailbox = ? AND id = ?")
            .bind(mailbox)
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(mailbox, %id, "mail deleted");
        }
        Ok(deleted)
    }

    /// Count unread mails in a mailbox.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub async fn unread_count(&self, mailbox: &str) -> Result<u32> {
        let row = sqlx::query(
            r"
            SELECT COUNT(*) as count
            FROM mails
            WHERE mailbox = ? AND read = 0
            ",
        )
        .bind(mailbox)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get::<i64, _>("count") as u32)
    }
}
