//! # shingles
//!
//! Page-aware text chunking for retrieval-augmented generation (RAG)
//! pipelines.
//!
//! ## The Problem
//!
//! Documents arrive as per-page text lines, exactly as an extractor
//! linearized them. Embedding and retrieval need something else entirely:
//! bounded chunks of coherent prose that remember which page they came
//! from. Between the two sit three problems that look trivial and are not:
//!
//! - Extractors emit *layout* lines. A paragraph is wrapped across many
//!   lines, words are split with hyphens at the margin, and blank or stubby
//!   lines are the only paragraph separators you get.
//! - Sentence boundaries are language-sensitive. `"Mr. Smith arrived."` is
//!   one sentence; `"今天很好。走吧。"` is two, and the rules that decide
//!   differ by script.
//! - Chunks need overlap for context continuity, but a sliding window over
//!   *sentences* has to guarantee it still terminates when a single
//!   sentence swallows the whole overlap budget.
//!
//! ## The Pipeline
//!
//! Three stages, data flowing strictly forward; no stage mutates its input:
//!
//! ```text
//! PageText (raw lines)
//!     │  ParagraphAssembler: hyphen rejoin, blank/short-line flush
//!     ▼
//! Paragraph (page-tagged)
//!     │  SentenceSplitter: CJK terminal rule | Latin lookahead rule
//!     ▼
//! Sentence (page-tagged)
//!     │  SlidingWindow: greedy pack, backward overlap walk
//!     ▼
//! Shingle { content, page, source }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use shingles::{PageText, Pipeline};
//!
//! let pages = vec![
//!     PageText::new(0, [
//!         "Machine learning models learn pat-",
//!         "terns from data. They generalize to",
//!         "unseen inputs.",
//!         "",
//!         "Deep learning stacks many layers.",
//!     ]),
//! ];
//!
//! let shingles = Pipeline::new().run("intro.pdf", &pages);
//!
//! assert!(!shingles.is_empty());
//! assert_eq!(shingles[0].page, 0);
//! assert!(shingles[0].content.contains("patterns from data."));
//! ```
//!
//! ## Stage-by-Stage Usage
//!
//! Each stage is a public type and can be driven on its own, which is how
//! the window logic is tested against synthetic sentence lists:
//!
//! ```rust
//! use shingles::{Sentence, SlidingWindow, WindowBudget};
//!
//! let sentences = vec![
//!     Sentence::new(0, "AAAAA."),
//!     Sentence::new(0, "BBBBB."),
//!     Sentence::new(0, "CCCCC."),
//!     Sentence::new(0, "DDDDD."),
//! ];
//! let window = SlidingWindow::new(WindowBudget::new(14, 7).unwrap());
//! let shingles = window.pack(&sentences, "doc");
//! assert_eq!(shingles.len(), 3);
//! ```
//!
//! ## Language Detection
//!
//! Detection is a collaborator, not a built-in: implement
//! [`LanguageDetector`] over whatever identifier you already run. Failure
//! is cheapest-possible: return `None` and the splitter uses the Latin
//! rule. Without a detector, [`AssumeLatin`] does exactly that for every
//! paragraph.
//!
//! ## What This Crate Does Not Do
//!
//! No document parsing (plug in a [`PageSource`]), no embedding, no vector
//! store, no retrieval. Shingles go out in order; batching them toward a
//! store is the caller's concern.

mod budget;
mod error;
mod language;
mod page;
mod paragraph;
mod pipeline;
mod sentence;
mod shingle;
mod window;

pub use budget::WindowBudget;
pub use error::{Error, Result};
pub use language::{AssumeLatin, LanguageDetector, LanguageTag, SplitRule};
pub use page::{PageSource, PageText};
pub use paragraph::{Paragraph, ParagraphAssembler};
pub use pipeline::Pipeline;
pub use sentence::{Sentence, SentenceSplitter};
pub use shingle::Shingle;
pub use window::SlidingWindow;
