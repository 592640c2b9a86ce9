//! Page-level input: raw text lines tagged with a page index.

use crate::Result;

/// Raw text lines for a single page.
///
/// This is the crate's input unit: an upstream extractor (PDF parser, OCR
/// layer, whatever linearizes the document) hands over one `PageText` per
/// page it kept. Lines arrive in reading order; layout analysis has already
/// happened upstream.
///
/// Page indices are zero-based and monotonically assigned by the extractor.
/// They need not be contiguous: an extractor that filters pages keeps the
/// original numbering.
///
/// ```rust
/// use shingles::PageText;
///
/// let page = PageText::new(0, ["First line.", "Second line."]);
/// assert_eq!(page.index, 0);
/// assert_eq!(page.lines.len(), 2);
/// ```
///
/// An empty `lines` vector is valid (an image-only page, say) and simply
/// contributes no paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageText {
    /// Zero-based page index assigned by the extractor.
    pub index: usize,
    /// Raw text lines in reading order.
    pub lines: Vec<String>,
}

impl PageText {
    /// Create a page from its index and lines.
    #[must_use]
    pub fn new<I, S>(index: usize, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            index,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// A fallible source of page text, typically a document parser.
///
/// Implement this to plug an extractor into [`Pipeline::run_source`]. A
/// source that cannot open or parse its document reports
/// [`Error::Extraction`]; a readable document with no text is *not* an
/// error and should return pages with empty line lists (or no pages).
///
/// [`Pipeline::run_source`]: crate::Pipeline::run_source
/// [`Error::Extraction`]: crate::Error::Extraction
pub trait PageSource {
    /// Extract all pages, in page order.
    fn extract(&self) -> Result<Vec<PageText>>;
}
