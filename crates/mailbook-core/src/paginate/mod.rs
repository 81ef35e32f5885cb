//! Book pagination.
//!
//! A mail is read as a book: a header block on the first page followed by
//! the body, reflowed into pages of at most [`PageLayout::page_lines`] lines
//! of at most [`PageLayout::line_length`] characters. Width is counted in
//! `char`s; there is no word wrapping, an over-long line is cut at the limit
//! and its remainder continues on the next line (possibly on the next page).
//!
//! # Example
//!
//! ```
//! use mailbook_core::{PageLayout, join_body, paginate};
//!
//! let body = "x".repeat(45);
//! let pages = paginate(PageLayout::default(), ["From Alice", "Hi"], &body);
//!
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].line_count(), 5);
//! assert_eq!(join_body(&pages), body);
//! ```

mod layout;

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

pub use layout::PageLayout;

/// One body line placed on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    continued: bool,
}

impl Line {
    /// Text of the line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the line was cut and the next body line carries on
    /// with the rest of it.
    #[must_use]
    pub const fn is_continued(&self) -> bool {
        self.continued
    }
}

/// A single page of a book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    header: Vec<String>,
    body: Vec<Line>,
}

impl Page {
    /// Header lines (only ever present on the first page).
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Body lines.
    #[must_use]
    pub fn body(&self) -> &[Line] {
        &self.body
    }

    /// Number of lines on the page, header included.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.header.len() + self.body.len()
    }

    /// Returns true if nothing has been placed on the page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_count() == 0
    }

    /// Iterates over all lines of the page, header first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.header
            .iter()
            .map(String::as_str)
            .chain(self.body.iter().map(Line::text))
    }

    /// The page as a single string, lines joined by `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Splits a body into lines on `\n` or `\r\n`.
///
/// The empty body has no lines. A trailing newline yields a trailing empty
/// line, so joining the result with `\n` gives back the body with every
/// `\r\n` turned into `\n`. A `\r` not followed by `\n` is kept as text.
#[must_use]
pub fn split_body(body: &str) -> Vec<&str> {
    if body.is_empty() {
        return Vec::new();
    }
    let last = body.matches('\n').count();
    body.split('\n')
        .enumerate()
        .map(|(index, line)| {
            if index < last {
                line.strip_suffix('\r').unwrap_or(line)
            } else {
                line
            }
        })
        .collect()
}

/// Reflows `header` and `body` into pages.
///
/// The header fills the top of the first page and is never repeated. A page
/// is only emitted once something was placed on it: an empty body with a
/// header gives a single header-only page, an empty body without a header
/// gives no pages at all.
#[must_use]
pub fn paginate<I, S>(layout: PageLayout, header: I, body: &str) -> Vec<Page>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut pending: VecDeque<String> = split_body(body).into_iter().map(String::from).collect();
    let mut pages = Vec::new();
    let mut page = Page {
        header: header.into_iter().map(Into::into).collect(),
        body: Vec::new(),
    };

    loop {
        let mut used = page.line_count();
        while used < layout.page_lines() {
            let Some(fragment) = pending.pop_front() else {
                break;
            };
            match cut_at(&fragment, layout.line_length()) {
                Some(at) => {
                    let mut head = fragment;
                    let rest = head.split_off(at);
                    page.body.push(Line {
                        text: head,
                        continued: true,
                    });
                    pending.push_front(rest);
                }
                None => page.body.push(Line {
                    text: fragment,
                    continued: false,
                }),
            }
            used += 1;
        }

        if pending.is_empty() {
            if !page.is_empty() {
                pages.push(page);
            }
            break;
        }
        pages.push(std::mem::take(&mut page));
    }

    debug!(
        pages = pages.len(),
        page_lines = layout.page_lines(),
        line_length = layout.line_length(),
        "paginated body"
    );
    pages
}

/// Rebuilds the body text from the body lines of `pages`.
#[must_use]
pub fn join_body(pages: &[Page]) -> String {
    let mut body = String::new();
    let mut newline = false;
    for line in pages.iter().flat_map(Page::body) {
        if newline {
            body.push('\n');
        }
        body.push_str(line.text());
        newline = !line.continued;
    }
    body
}

/// Byte offset just past the first `width` chars, or `None` if `text` fits.
fn cut_at(text: &str, width: usize) -> Option<usize> {
    text.char_indices().nth(width).map(|(at, _)| at)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn layout(page_lines: usize, line_length: usize) -> PageLayout {
        PageLayout::new(page_lines, line_length).unwrap()
    }

    fn body_texts(page: &Page) -> Vec<&str> {
        page.body().iter().map(Line::text).collect()
    }

    #[test]
    fn test_long_line_fits_first_page() {
        let body = "a".repeat(45);
        let pages = paginate(PageLayout::default(), ["Header one", "Header two"], &body);

        assert_eq!(pages.len(), 1);
        let page = &pages[0];
        assert_eq!(page.header(), ["Header one", "Header two"]);
        let lengths: Vec<usize> = page.body().iter().map(|l| l.text().len()).collect();
        assert_eq!(lengths, [19, 19, 7]);
        assert!(page.body()[0].is_continued());
        assert!(page.body()[1].is_continued());
        assert!(!page.body()[2].is_continued());
    }

    #[test]
    fn test_exact_width_not_split() {
        let body = "b".repeat(19);
        let pages = paginate(PageLayout::default(), Vec::<String>::new(), &body);
        assert_eq!(pages.len(), 1);
        assert_eq!(body_texts(&pages[0]), [body.as_str()]);
        assert!(!pages[0].body()[0].is_continued());
    }

    #[test]
    fn test_remainder_carries_to_next_page() {
        let pages = paginate(layout(3, 4), ["H"], "abcdefghij\nxy");

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].header(), ["H"]);
        assert_eq!(body_texts(&pages[0]), ["abcd", "efgh"]);
        assert!(pages[1].header().is_empty());
        assert_eq!(body_texts(&pages[1]), ["ij", "xy"]);
        assert_eq!(join_body(&pages), "abcdefghij\nxy");
    }

    #[test]
    fn test_header_not_repeated() {
        let body = (0..30).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let pages = paginate(PageLayout::default(), ["Title", "From"], &body);

        // 12 body lines on the first page, 14 on the second, 4 on the third.
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].body().len(), 12);
        assert_eq!(pages[1].body().len(), 14);
        assert_eq!(pages[2].body().len(), 4);
        assert!(pages.iter().skip(1).all(|p| p.header().is_empty()));
    }

    #[test]
    fn test_empty_body_with_header() {
        let pages = paginate(PageLayout::default(), ["Title"], "");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].header(), ["Title"]);
        assert!(pages[0].body().is_empty());
        assert_eq!(join_body(&pages), "");
    }

    #[test]
    fn test_empty_body_without_header() {
        let pages = paginate(PageLayout::default(), Vec::<String>::new(), "");
        assert!(pages.is_empty());
    }

    #[test]
    fn test_header_longer_than_page() {
        let header: Vec<String> = (0..5).map(|i| format!("h{i}")).collect();
        let pages = paginate(layout(3, 10), header, "body");

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].header().len(), 5);
        assert!(pages[0].body().is_empty());
        assert_eq!(body_texts(&pages[1]), ["body"]);
    }

    #[test]
    fn test_crlf_and_trailing_newline() {
        assert_eq!(split_body("a\r\nb\n"), ["a", "b", ""]);
        assert!(split_body("").is_empty());

        let pages = paginate(PageLayout::default(), Vec::<String>::new(), "a\r\nb\n");
        assert_eq!(body_texts(&pages[0]), ["a", "b", ""]);
        assert_eq!(join_body(&pages), "a\nb\n");
    }

    #[test]
    fn test_lone_carriage_return_is_text() {
        assert_eq!(split_body("abc\r"), ["abc\r"]);
        assert_eq!(split_body("a\r\nb\r"), ["a", "b\r"]);
        assert_eq!(split_body("a\rb"), ["a\rb"]);

        let pages = paginate(PageLayout::default(), Vec::<String>::new(), "abc\r");
        assert_eq!(join_body(&pages), "abc\r");
        let pages = paginate(PageLayout::default(), Vec::<String>::new(), "a\r\nb\r");
        assert_eq!(join_body(&pages), "a\nb\r");
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let body = "é".repeat(6);
        let pages = paginate(layout(14, 4), Vec::<String>::new(), &body);
        assert_eq!(body_texts(&pages[0]), ["éééé", "éé"]);
    }

    #[test]
    fn test_page_text() {
        let pages = paginate(layout(14, 5), ["Hi"], "hello world");
        assert_eq!(pages[0].text(), "Hi\nhello\n worl\nd");
        assert_eq!(pages[0].to_string(), pages[0].text());
    }
}
