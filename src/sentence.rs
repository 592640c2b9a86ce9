//! Language-sensitive sentence segmentation.
//!
//! Splits one paragraph into sentences, the atomic unit shingles are packed
//! from.
//!
//! ## The Hard Part: Latin Terminal Marks Are Ambiguous
//!
//! ```text
//! "Mr. Smith arrived. He sat down."
//!    ^              ^
//!    abbreviation   sentence end
//! ```
//!
//! The strict Latin rule therefore requires the *next* token to look like a
//! sentence start: terminal mark, whitespace, then an uppercase letter or an
//! opening quote. That skips most abbreviations but can fail to find any
//! boundary at all (all-lowercase OCR output, for instance), so a loose rule
//! that drops the lookahead kicks in for long paragraphs the strict rule
//! left whole.
//!
//! CJK terminal punctuation (`。！？；`) has no abbreviation problem; a
//! plain cut after each mark suffices, and the mark stays with its sentence.

use std::sync::LazyLock;

use regex::Regex;

use crate::{LanguageDetector, Paragraph, SplitRule};

/// Strict Latin boundary: terminal mark, whitespace, then something that
/// looks like a sentence start. The final class char belongs to the next
/// sentence, not to the boundary.
static LATIN_STRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?]\s+["'“A-Z]"#).expect("valid strict boundary regex"));

/// Loose Latin boundary: terminal mark plus whitespace, no lookahead.
static LATIN_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid loose boundary regex"));

/// Terminal marks that end a CJK sentence.
const CJK_TERMINALS: [char; 6] = ['。', '！', '？', '；', '!', '?'];

/// How long a paragraph must be (in chars) before a strict-rule miss
/// triggers the loose fallback.
const DEFAULT_FALLBACK_THRESHOLD: usize = 100;

/// A sentence tagged with the page of the paragraph it came from.
///
/// Text is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentence {
    /// Page index inherited from the originating paragraph.
    pub page: usize,
    /// Trimmed sentence text.
    pub text: String,
}

impl Sentence {
    /// Create a sentence.
    #[must_use]
    pub fn new(page: usize, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }

    /// Character count of the text (the unit window budgets are measured in).
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits paragraphs into sentences, choosing the rule per paragraph from a
/// language detector's best guess.
///
/// ## Example
///
/// ```rust
/// use shingles::{Paragraph, SentenceSplitter};
///
/// let splitter = SentenceSplitter::default();
/// let para = Paragraph::new(0, "First point. Second point. Done.");
/// let sentences = splitter.split(&para);
///
/// assert_eq!(sentences.len(), 3);
/// assert_eq!(sentences[0].text, "First point.");
/// ```
#[derive(Debug, Clone)]
pub struct SentenceSplitter<D = crate::AssumeLatin> {
    detector: D,
    fallback_threshold: usize,
}

impl Default for SentenceSplitter<crate::AssumeLatin> {
    fn default() -> Self {
        Self::new(crate::AssumeLatin)
    }
}

impl<D: LanguageDetector> SentenceSplitter<D> {
    /// Create a splitter around a language detector.
    #[must_use]
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
        }
    }

    /// Set the paragraph length (chars) above which a strict-rule miss falls
    /// back to the loose rule. Default: 100.
    #[must_use]
    pub fn with_fallback_threshold(mut self, chars: usize) -> Self {
        self.fallback_threshold = chars;
        self
    }

    /// Split a paragraph into trimmed, non-empty sentences.
    ///
    /// Every sentence inherits the paragraph's page. Detection failure is
    /// recovered here by assuming a Latin script; it never propagates.
    #[must_use]
    pub fn split(&self, paragraph: &Paragraph) -> Vec<Sentence> {
        let text = paragraph.text.as_str();
        let rule = SplitRule::for_language(self.detector.detect(text).as_ref());

        let fragments = match rule {
            SplitRule::CjkTerminal => split_cjk(text),
            SplitRule::LatinLookahead => {
                let strict = split_latin(text, &LATIN_STRICT);
                if strict.len() == 1 && text.chars().count() > self.fallback_threshold {
                    split_latin(text, &LATIN_LOOSE)
                } else {
                    strict
                }
            }
        };

        fragments
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Sentence::new(paragraph.page, s))
            .collect()
    }
}

/// Cut after each CJK terminal mark, keeping the mark with its sentence.
fn split_cjk(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut last = 0;
    for (idx, ch) in text.char_indices() {
        if CJK_TERMINALS.contains(&ch) {
            let cut = idx + ch.len_utf8();
            fragments.push(&text[last..cut]);
            last = cut;
        }
    }
    if last < text.len() {
        fragments.push(&text[last..]);
    }
    fragments
}

/// Cut at each boundary match, keeping the terminal mark with the preceding
/// sentence and handing the matched lookahead char (if any) to the next.
///
/// A strict match ends with the uppercase/quote char of the next sentence;
/// a loose match ends with whitespace. Anything non-whitespace at the tail
/// of the match is therefore given back to the following fragment.
fn split_latin<'t>(text: &'t str, boundary: &Regex) -> Vec<&'t str> {
    let mut fragments = Vec::new();
    let mut last = 0;
    for m in boundary.find_iter(text) {
        let giveback = match m.as_str().chars().last() {
            Some(ch) if !ch.is_whitespace() => ch.len_utf8(),
            _ => 0,
        };
        // Terminal marks are one byte, so the mark ends at start + 1.
        fragments.push(&text[last..=m.start()]);
        last = m.end() - giveback;
    }
    fragments.push(&text[last..]);
    fragments
}
