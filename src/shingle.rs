//! The Shingle type: a chunk of text with page and source provenance.

/// A chunk of text carrying its provenance.
///
/// The name "shingle" evokes roof tiles: each one overlaps its neighbor so
/// that nothing leaks through the seams. Adjacent shingles repeat a tail of
/// trailing sentences so retrieval context survives the cut.
///
/// ## Provenance
///
/// `page` is the page index of the *first* sentence packed into this
/// shingle; `source` is an opaque caller-supplied identifier (typically the
/// originating document's path), constant across all shingles of one run:
///
/// ```rust
/// use shingles::Shingle;
///
/// let shingle = Shingle::new("The answer is 42.", 3, "report.pdf");
/// assert_eq!(shingle.page, 3);
/// assert_eq!(shingle.source, "report.pdf");
/// ```
///
/// ## Size
///
/// Content is a space-joined run of whole sentences. Multi-sentence shingles
/// respect the window budget; a single sentence longer than the budget is
/// carried whole rather than cut mid-sentence, so one-sentence shingles may
/// exceed it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shingle {
    /// The chunk text: whole sentences joined by single spaces.
    pub content: String,
    /// Page index of the first sentence in this chunk.
    pub page: usize,
    /// Caller-supplied identifier of the originating document.
    pub source: String,
}

impl Shingle {
    /// Create a new shingle.
    #[must_use]
    pub fn new(content: impl Into<String>, page: usize, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            page,
            source: source.into(),
        }
    }

    /// The length of the content in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// The length of the content in characters (the unit window budgets are
    /// measured in).
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for Shingle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shingle {{ source: {}, page: {}, chars: {} }}",
            self.source,
            self.page,
            self.char_len()
        )
    }
}
