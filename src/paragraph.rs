//! Paragraph reconstruction from raw page lines.
//!
//! Extractors hand over text line by line, the way it sat on the page. This
//! module undoes the layout: wrapped lines are merged back into paragraphs,
//! hyphen-split words are rejoined, and blank or too-short lines act as
//! paragraph separators.
//!
//! ```text
//! "Hello wor-"     ┐
//! "ld today."      ┘ one paragraph: "Hello world today."
//! ""               <- separator
//! "Next para."       another paragraph: "Next para."
//! ```
//!
//! Paragraphs never span pages: a page boundary always terminates the
//! current paragraph even when the prose logically continues, because the
//! page tag has to stay unambiguous.

use crate::PageText;

/// A paragraph tagged with the page its lines were found on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    /// Page index the paragraph's lines came from.
    pub page: usize,
    /// Merged paragraph text.
    pub text: String,
}

impl Paragraph {
    /// Create a paragraph.
    #[must_use]
    pub fn new(page: usize, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// Merges raw page lines into page-tagged paragraphs.
///
/// A line is *effective* when it is non-blank and its trailing-trimmed
/// length (in chars) reaches `min_line_length`; anything else separates
/// paragraphs. Effective lines accumulate into a buffer: a trailing hyphen
/// joins the next line with no space (a word wrapped mid-token), otherwise
/// lines join with a single space.
///
/// ## Example
///
/// ```rust
/// use shingles::{PageText, ParagraphAssembler};
///
/// let page = PageText::new(0, ["Hello wor-", "ld today.", "", "Next para."]);
/// let paragraphs = ParagraphAssembler::new(1).assemble(&[page]);
///
/// assert_eq!(paragraphs.len(), 2);
/// assert_eq!(paragraphs[0].text, "Hello world today.");
/// assert_eq!(paragraphs[1].text, "Next para.");
/// ```
#[derive(Debug, Clone)]
pub struct ParagraphAssembler {
    min_line_length: usize,
    pages: Option<Vec<usize>>,
}

impl ParagraphAssembler {
    /// Create an assembler with the given effective-line threshold (chars).
    #[must_use]
    pub fn new(min_line_length: usize) -> Self {
        Self {
            min_line_length,
            pages: None,
        }
    }

    /// Restrict assembly to an allowlist of page indices. Pages not listed
    /// are skipped before any line processing.
    #[must_use]
    pub fn with_pages(mut self, pages: impl IntoIterator<Item = usize>) -> Self {
        self.pages = Some(pages.into_iter().collect());
        self
    }

    /// Merge lines into paragraphs, in input order.
    ///
    /// Pages with no qualifying lines contribute nothing; that is a normal
    /// outcome for scanned or image-only pages, not an error. Page indices
    /// in the output are non-decreasing as long as the input pages arrive in
    /// extraction order.
    #[must_use]
    pub fn assemble(&self, pages: &[PageText]) -> Vec<Paragraph> {
        let mut paragraphs = Vec::new();

        for page in pages {
            if let Some(allowed) = &self.pages {
                if !allowed.contains(&page.index) {
                    continue;
                }
            }

            let mut buffer = String::new();
            // Set when the buffer ends mid-word because the last line was
            // hyphen-wrapped; the next line then joins with no space.
            let mut midword = false;
            for line in &page.lines {
                // Trailing trim only: leading whitespace may be meaningful.
                let line = line.trim_end();
                if !line.is_empty() && line.chars().count() >= self.min_line_length {
                    if !midword && !buffer.is_empty() {
                        buffer.push(' ');
                    }
                    if line.ends_with('-') {
                        buffer.push_str(line.trim_end_matches('-'));
                        midword = true;
                    } else {
                        buffer.push_str(line);
                        midword = false;
                    }
                } else {
                    if !buffer.is_empty() {
                        paragraphs.push(Paragraph::new(page.index, std::mem::take(&mut buffer)));
                    }
                    midword = false;
                }
            }

            if !buffer.is_empty() {
                paragraphs.push(Paragraph::new(page.index, buffer));
            }
        }

        paragraphs
    }
}
