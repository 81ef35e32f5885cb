//! Property-based tests for the codec and the paginator.
//!
//! These tests verify invariants hold for arbitrary inputs:
//!
//! - Records survive an encode/decode cycle field for field
//! - Every line of every page fits the configured width
//! - Every page fits the configured line budget
//! - The pages hold the body exactly, in order

use proptest::prelude::*;

use crate::mail::{MailCategory, MailId, MailRecord};
use crate::paginate::{PageLayout, join_body, paginate};

/// Field text that cannot contain the delimiter.
fn field() -> impl Strategy<Value = String> {
    "[^§\n]{0,24}"
}

/// Body text: arbitrary characters, newlines and carriage returns.
fn body() -> impl Strategy<Value = String> {
    "(.|\r|\n){0,400}"
}

fn category() -> impl Strategy<Value = MailCategory> {
    prop::sample::select(MailCategory::ALL.to_vec())
}

fn layout() -> impl Strategy<Value = PageLayout> {
    (1usize..20, 1usize..30).prop_map(|(lines, width)| {
        PageLayout::new(lines, width).unwrap_or_default()
    })
}

// ==================== Codec Property Tests ====================

proptest! {
    /// Decoding an encoded record yields the same record.
    #[test]
    fn record_roundtrip(
        millis in 0i64..4_102_444_800_000,
        jitter in 0u8..100,
        category in category(),
        sender in field(),
        receiver in field(),
        title in field(),
        content in ".{0,200}",
    ) {
        #[allow(clippy::cast_precision_loss)]
        let id = MailId::new(millis as f64 + f64::from(jitter) / 100.0);
        let mail = MailRecord::from_parts(id, category, sender, receiver, title, content);

        let decoded = MailRecord::deserialize(id, &mail.serialize());
        prop_assert_eq!(decoded.ok(), Some(mail.clone()));

        let decoded = MailRecord::deserialize_with_id(&mail.serialize_with_id());
        prop_assert_eq!(decoded.ok(), Some(mail));
    }
}

// ==================== Pagination Property Tests ====================

proptest! {
    /// No body line is wider than the layout allows.
    #[test]
    fn lines_fit_width(layout in layout(), body in body()) {
        let pages = paginate(layout, ["header"], &body);
        for page in &pages {
            for line in page.body() {
                prop_assert!(line.text().chars().count() <= layout.line_length());
            }
        }
    }

    /// No page holds more lines than the layout allows.
    #[test]
    fn pages_fit_budget(
        layout in layout(),
        header in prop::collection::vec(field(), 0..3),
        body in body(),
    ) {
        prop_assume!(header.len() <= layout.page_lines());
        let pages = paginate(layout, header.clone(), &body);

        for page in &pages {
            prop_assert!(page.line_count() <= layout.page_lines());
        }
        if let Some(first) = pages.first() {
            prop_assert_eq!(first.header(), header.as_slice());
        }
        for page in pages.iter().skip(1) {
            prop_assert!(page.header().is_empty());
            prop_assert!(!page.body().is_empty());
        }
    }

    /// The body can be rebuilt from the pages without loss or duplication.
    #[test]
    fn body_preserved(layout in layout(), body in body()) {
        let pages = paginate(layout, ["header"], &body);
        prop_assert_eq!(join_body(&pages), body.replace("\r\n", "\n"));
    }

    /// Only the last page may have spare room.
    #[test]
    fn pages_are_filled(layout in layout(), body in body()) {
        let pages = paginate(layout, Vec::<String>::new(), &body);
        if let Some((_, full)) = pages.split_last() {
            for page in full {
                prop_assert_eq!(page.line_count(), layout.page_lines());
            }
        }
    }
}
