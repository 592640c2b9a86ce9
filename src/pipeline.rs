//! End-to-end composition: raw page lines in, shingles out.

use tracing::{debug, warn};

use crate::{
    AssumeLatin, LanguageDetector, PageSource, PageText, ParagraphAssembler, Result, Sentence,
    SentenceSplitter, Shingle, SlidingWindow, WindowBudget,
};

/// The full chunking pipeline.
///
/// Data flows strictly forward, each stage consuming the previous stage's
/// output: lines → paragraphs → sentences → shingles. Nothing is cached
/// between runs and no stage holds mutable state, so one `Pipeline` value
/// can serve many documents, including from parallel workers.
///
/// ## Example
///
/// ```rust
/// use shingles::{PageText, Pipeline, WindowBudget};
///
/// let pages = vec![PageText::new(
///     0,
///     ["The fox jumped. The dog slept.", "", "A new paragraph follows."],
/// )];
///
/// let pipeline = Pipeline::new().with_budget(WindowBudget::new(200, 40).unwrap());
/// let shingles = pipeline.run("fable.pdf", &pages);
///
/// assert!(!shingles.is_empty());
/// assert!(shingles.iter().all(|s| s.source == "fable.pdf"));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<D = AssumeLatin> {
    detector: D,
    budget: WindowBudget,
    min_line_length: usize,
    pages: Option<Vec<usize>>,
    fallback_threshold: Option<usize>,
}

impl Pipeline<AssumeLatin> {
    /// Create a pipeline with defaults: every page, minimum effective line
    /// length 1, 800/200 window budget, no language detector (Latin rule
    /// throughout).
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: AssumeLatin,
            budget: WindowBudget::default(),
            min_line_length: 1,
            pages: None,
            fallback_threshold: None,
        }
    }
}

impl Default for Pipeline<AssumeLatin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: LanguageDetector> Pipeline<D> {
    /// Swap in a language detector for sentence segmentation.
    #[must_use]
    pub fn with_detector<E: LanguageDetector>(self, detector: E) -> Pipeline<E> {
        Pipeline {
            detector,
            budget: self.budget,
            min_line_length: self.min_line_length,
            pages: self.pages,
            fallback_threshold: self.fallback_threshold,
        }
    }

    /// Set the window budget (chunk size and overlap, in chars).
    #[must_use]
    pub fn with_budget(mut self, budget: WindowBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Set the minimum effective line length for paragraph reconstruction.
    #[must_use]
    pub fn with_min_line_length(mut self, chars: usize) -> Self {
        self.min_line_length = chars;
        self
    }

    /// Restrict processing to an allowlist of page indices.
    #[must_use]
    pub fn with_pages(mut self, pages: impl IntoIterator<Item = usize>) -> Self {
        self.pages = Some(pages.into_iter().collect());
        self
    }

    /// Set the paragraph length above which the segmenter's loose fallback
    /// may kick in.
    #[must_use]
    pub fn with_fallback_threshold(mut self, chars: usize) -> Self {
        self.fallback_threshold = Some(chars);
        self
    }

    /// Chunk already-extracted pages.
    ///
    /// An empty result is a valid outcome (fully scanned document, or every
    /// page filtered out); it is logged at `warn` level, not reported as an
    /// error.
    #[must_use]
    pub fn run(&self, source: &str, pages: &[PageText]) -> Vec<Shingle> {
        let mut assembler = ParagraphAssembler::new(self.min_line_length);
        if let Some(allowed) = &self.pages {
            assembler = assembler.with_pages(allowed.iter().copied());
        }
        let paragraphs = assembler.assemble(pages);

        if paragraphs.is_empty() {
            warn!(source, "no text reconstructed, document may be scanned or image-only");
            return Vec::new();
        }

        let mut splitter = SentenceSplitter::new(&self.detector);
        if let Some(chars) = self.fallback_threshold {
            splitter = splitter.with_fallback_threshold(chars);
        }
        let sentences: Vec<Sentence> = paragraphs.iter().flat_map(|p| splitter.split(p)).collect();

        let shingles = SlidingWindow::new(self.budget).pack(&sentences, source);
        debug!(
            source,
            paragraphs = paragraphs.len(),
            sentences = sentences.len(),
            shingles = shingles.len(),
            "document chunked"
        );
        shingles
    }

    /// Extract pages from a source, then chunk them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Extraction`] when the extractor fails. An
    /// extractor that succeeds with no text yields `Ok` and an empty vector.
    pub fn run_source<S: PageSource>(&self, source: &str, extractor: &S) -> Result<Vec<Shingle>> {
        let pages = extractor.extract()?;
        Ok(self.run(source, &pages))
    }
}
