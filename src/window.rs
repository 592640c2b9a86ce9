//! Sliding-window packing of sentences into shingles.
//!
//! ## The Algorithm
//!
//! A cursor walks the sentence sequence. Each chunk starts at the cursor,
//! greedily grows while the next sentence (plus its joining space) still
//! fits the size budget, and is emitted whole. The next chunk's start is
//! then found by walking *backward* over the sentences just emitted,
//! spending the overlap budget one sentence at a time:
//!
//! ```text
//! chunk_size = 14, overlap = 7
//!
//! indices:   0        1        2        3
//! sentences: "AAAAA." "BBBBB." "CCCCC." "DDDDD."   (6 chars each)
//!
//! chunk at 0: "AAAAA. BBBBB."  cursor stops at 2
//!   backward walk from 1: 6 + 1 space = 7 >= overlap, next start = 1
//! chunk at 1: "BBBBB. CCCCC."  cursor stops at 3
//!   backward walk from 2: next start = 2
//! chunk at 2: "CCCCC. DDDDD."  cursor hits the end, done
//! ```
//!
//! ## Termination
//!
//! The backward walk can collapse to zero steps when a single sentence is
//! longer than the whole overlap budget. The forward-progress clamp handles
//! that: a chunk's successor never starts at or before the chunk's own
//! start index, so the cursor strictly advances and the packer emits at
//! most one shingle per sentence. No error path exists here; the packer is
//! total over finite input.

use crate::{Sentence, Shingle, WindowBudget};

/// Packs page-tagged sentences into bounded, overlapping shingles.
///
/// ## Example
///
/// ```rust
/// use shingles::{Sentence, SlidingWindow, WindowBudget};
///
/// let sentences = vec![
///     Sentence::new(0, "AAAAA."),
///     Sentence::new(0, "BBBBB."),
///     Sentence::new(0, "CCCCC."),
///     Sentence::new(0, "DDDDD."),
/// ];
///
/// let window = SlidingWindow::new(WindowBudget::new(14, 7).unwrap());
/// let shingles = window.pack(&sentences, "doc.pdf");
///
/// let contents: Vec<&str> = shingles.iter().map(|s| s.content.as_str()).collect();
/// assert_eq!(contents, ["AAAAA. BBBBB.", "BBBBB. CCCCC.", "CCCCC. DDDDD."]);
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    budget: WindowBudget,
}

impl SlidingWindow {
    /// Create a packer with the given budget.
    #[must_use]
    pub const fn new(budget: WindowBudget) -> Self {
        Self { budget }
    }

    /// The budget this packer was built with.
    #[must_use]
    pub const fn budget(&self) -> WindowBudget {
        self.budget
    }

    /// Pack sentences into shingles, tagging each with `source`.
    ///
    /// Zero sentences produce zero shingles. A sentence longer than the
    /// chunk size is never split; it forms a single-sentence shingle that
    /// exceeds the budget. Output is deterministic for identical input.
    #[must_use]
    pub fn pack(&self, sentences: &[Sentence], source: &str) -> Vec<Shingle> {
        let total = sentences.len();
        if total == 0 {
            return Vec::new();
        }

        // Char counts are reused across the grow loop and every backward
        // walk; compute them once.
        let lens: Vec<usize> = sentences.iter().map(Sentence::char_len).collect();

        let mut shingles = Vec::new();
        let mut i = 0;

        while i < total {
            let start = i;
            let page = sentences[i].page;
            let mut content = sentences[i].text.clone();
            let mut content_chars = lens[i];
            i += 1;

            // Grow: whole sentences only, one joining space each.
            while i < total && !self.budget.would_overflow(content_chars, lens[i] + 1) {
                content.push(' ');
                content.push_str(&sentences[i].text);
                content_chars += lens[i] + 1;
                i += 1;
            }

            shingles.push(Shingle::new(content, page, source));

            if i >= total {
                break;
            }

            let candidate = overlap_start(&lens, start, i, self.budget.overlap());
            // Forward-progress clamp, applied unconditionally after the
            // walk: never restart at or before the chunk we just emitted.
            let next_start = if candidate <= start { start + 1 } else { candidate };
            if next_start >= total {
                break;
            }
            i = next_start;
        }

        shingles
    }
}

/// Walk backward from `next` (one past the last packed sentence) toward
/// `start`, spending `overlap` chars; returns the index the next chunk
/// should start at so its head repeats roughly `overlap` chars of tail.
///
/// Each step costs the sentence's char count plus one joining space. The
/// walk stops as soon as the budget is met or the chunk start is reached;
/// the forward-progress clamp is the caller's job.
fn overlap_start(lens: &[usize], start: usize, next: usize, overlap: usize) -> usize {
    let mut walked = 0;
    let mut idx = next;
    while idx > start && walked < overlap {
        idx -= 1;
        walked += lens[idx] + 1;
    }
    idx
}
