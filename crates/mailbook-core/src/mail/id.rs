//! Mail identifiers and the clock they are derived from.
//!
//! An id is the creation time in epoch milliseconds plus a random fraction
//! in hundredths, which makes two mails created in the same millisecond
//! unlikely (but not impossible) to collide.
//!
//! # Example
//!
//! ```
//! use mailbook_core::{MockClock, generate_id};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let clock = MockClock::new(1_700_000_000_000);
//! let id = generate_id(&clock, &mut StdRng::seed_from_u64(7));
//! assert_eq!(id.millis(), 1_700_000_000_000);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Unique-ish identifier of a mail.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MailId(f64);

impl MailId {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Raw id value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Creation time in epoch milliseconds (the id floored).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // ids are millisecond timestamps, well inside i64
    pub fn millis(self) -> i64 {
        self.0.floor() as i64
    }
}

impl fmt::Display for MailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MailId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(value)),
            _ => Err(Error::InvalidId(s.to_string())),
        }
    }
}

/// Source of wall-clock time for id generation.
///
/// In production, use [`SystemClock`]. In tests, use [`MockClock`] to make
/// ids deterministic.
pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// System clock that uses real time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A settable clock for tests.
#[derive(Debug)]
pub struct MockClock {
    millis: AtomicI64,
}

impl MockClock {
    /// Creates a clock frozen at `millis`.
    #[must_use]
    pub const fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    /// Advances the clock by the given duration.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&self, duration: Duration) {
        self.millis
            .fetch_add(duration.as_millis() as i64, Ordering::SeqCst);
    }

    /// Sets the clock to `millis`.
    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// Generates a new mail id from `clock` plus a jitter of `0.00..=0.99` drawn from `rng`.
#[allow(clippy::cast_precision_loss)]
pub fn generate_id<C, R>(clock: &C, rng: &mut R) -> MailId
where
    C: Clock + ?Sized,
    R: Rng,
{
    let jitter: u8 = rng.gen_range(0..100);
    MailId(clock.now_millis() as f64 + f64::from(jitter) / 100.0)
}
