//! Language detection seam and segmentation rule selection.
//!
//! Sentence segmentation is language-sensitive: CJK scripts mark sentence
//! ends with unambiguous full-width punctuation, while Latin scripts reuse
//! `.` for abbreviations and need a lookahead heuristic. Which rule applies
//! is decided once per paragraph from a detector's best guess.
//!
//! Detection itself lives outside this crate. [`LanguageDetector`] is the
//! seam: plug in whatever identifier you run (a character n-gram model, a
//! service call, a fixed tag). Detection failure is expected and harmless:
//! a detector that returns `None` gets the Latin rule, which degrades
//! gracefully on most scripts.

/// A BCP 47-style language tag, e.g. `"en"`, `"zh-cn"`, `"ja"`.
///
/// Only the primary subtag matters here; everything after the first `-` or
/// `_` is ignored when classifying.
///
/// ```rust
/// use shingles::LanguageTag;
///
/// assert!(LanguageTag::new("zh-CN").is_cjk());
/// assert!(LanguageTag::new("ja").is_cjk());
/// assert!(!LanguageTag::new("en-US").is_cjk());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag from its string form.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The full tag as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary subtag, lowercased separator-free prefix.
    fn primary(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase()
    }

    /// Whether this tag names a CJK variant (`zh`, `ja`, `ko`).
    #[must_use]
    pub fn is_cjk(&self) -> bool {
        matches!(self.primary().as_str(), "zh" | "ja" | "ko")
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Best-effort language identification for a span of text.
///
/// Returning `None` means the detector failed or had no answer. That is not
/// an error condition; the segmenter falls back to the Latin rule.
pub trait LanguageDetector: Send + Sync {
    /// Guess the language of `text`, or decline with `None`.
    fn detect(&self, text: &str) -> Option<LanguageTag>;
}

impl<D: LanguageDetector + ?Sized> LanguageDetector for &D {
    fn detect(&self, text: &str) -> Option<LanguageTag> {
        (**self).detect(text)
    }
}

/// The no-op detector: always declines, so every paragraph gets the Latin
/// rule. The right default when inputs are known to be Latin-script or no
/// detector is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeLatin;

impl LanguageDetector for AssumeLatin {
    fn detect(&self, _text: &str) -> Option<LanguageTag> {
        None
    }
}

/// The segmentation algorithm chosen for one paragraph.
///
/// A closed two-variant decision rather than scattered conditionals: the
/// detector output maps to a rule exactly once, and each rule is testable on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// Cut immediately after each mark in `。！？；!?`. CJK terminal
    /// punctuation has no abbreviation problem, so no lookahead is needed.
    CjkTerminal,
    /// Cut after `.`, `!` or `?` followed by whitespace and an uppercase
    /// letter or opening quote, with a length-gated loose fallback when the
    /// strict rule finds no boundary.
    LatinLookahead,
}

impl SplitRule {
    /// Select the rule for a detection result.
    ///
    /// `None` (detection failed or declined) selects the Latin rule.
    #[must_use]
    pub fn for_language(tag: Option<&LanguageTag>) -> Self {
        match tag {
            Some(tag) if tag.is_cjk() => Self::CjkTerminal,
            _ => Self::LatinLookahead,
        }
    }
}
