//! Property-based tests for the chunking pipeline.
//!
//! These tests verify the load-bearing invariants:
//! - Coverage: chunks, overlap deduplicated, reproduce the sentence sequence
//! - Whole sentences: no chunk cuts a sentence
//! - Provenance: a chunk carries the page of its first sentence
//! - Bounds: multi-sentence chunks respect the size budget
//! - Termination: at most one chunk per sentence

use proptest::prelude::*;
use shingles::{
    PageText, Paragraph, ParagraphAssembler, Sentence, SentenceSplitter, Shingle, SlidingWindow,
    WindowBudget,
};

// =============================================================================
// Test Generators
// =============================================================================

/// Sentence lists with non-decreasing page tags.
fn arb_sentences() -> impl Strategy<Value = Vec<Sentence>> {
    prop::collection::vec(
        (prop::string::string_regex("[A-Za-z]{1,40}").unwrap(), 0usize..3),
        1..40,
    )
    .prop_map(|items| {
        let mut page = 0;
        items
            .into_iter()
            .enumerate()
            // The index suffix keeps texts unique so a chunk's sentence run
            // can be recovered without ambiguity.
            .map(|(i, (word, advance))| {
                page += advance;
                Sentence::new(page, format!("{word}{i}."))
            })
            .collect()
    })
}

/// Latin prose with sentence structure.
fn arb_prose() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[A-Z][a-z]{1,12}").unwrap(), 3..30).prop_map(
        |words| {
            let mut text = String::new();
            for (i, word) in words.iter().enumerate() {
                if i > 0 {
                    text.push(' ');
                }
                text.push_str(word);
                if i % 4 == 3 {
                    text.push('.');
                }
            }
            text.push('.');
            text
        },
    )
}

/// Page line lists, blanks included, with increasing page indices.
fn arb_pages() -> impl Strategy<Value = Vec<PageText>> {
    prop::collection::vec(
        prop::collection::vec(prop::string::string_regex("[ A-Za-z.]{0,30}").unwrap(), 0..12),
        1..5,
    )
    .prop_map(|pages| {
        pages
            .into_iter()
            .enumerate()
            .map(|(index, lines)| PageText::new(index, lines))
            .collect()
    })
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Recover the contiguous sentence run `[start, end]` a chunk was packed
/// from, searching from `from` onward. `None` means the content is not a
/// space-join of whole consecutive sentences.
fn recover_run(content: &str, sentences: &[Sentence], from: usize) -> Option<(usize, usize)> {
    for start in from..sentences.len() {
        let mut joined = sentences[start].text.clone();
        if joined == content {
            return Some((start, start));
        }
        if !content.starts_with(joined.as_str()) {
            continue;
        }
        for (end, sentence) in sentences.iter().enumerate().skip(start + 1) {
            joined.push(' ');
            joined.push_str(&sentence.text);
            if joined == content {
                return Some((start, end));
            }
            if !content.starts_with(joined.as_str()) {
                break;
            }
        }
    }
    None
}

/// Map every chunk to its sentence run, in order.
fn recover_runs(shingles: &[Shingle], sentences: &[Sentence]) -> Option<Vec<(usize, usize)>> {
    let mut runs = Vec::with_capacity(shingles.len());
    let mut from = 0;
    for shingle in shingles {
        let run = recover_run(&shingle.content, sentences, from)?;
        // Forward progress: the next run must start past this one.
        from = run.0 + 1;
        runs.push(run);
    }
    Some(runs)
}

// =============================================================================
// SlidingWindow Invariants
// =============================================================================

proptest! {
    #[test]
    fn window_chunks_are_whole_sentence_runs(
        sentences in arb_sentences(),
        size in 5usize..100,
        overlap in 0usize..50,
    ) {
        let window = SlidingWindow::new(WindowBudget::new(size, overlap).unwrap());
        let shingles = window.pack(&sentences, "doc");
        prop_assert!(recover_runs(&shingles, &sentences).is_some());
    }

    #[test]
    fn window_covers_every_sentence(
        sentences in arb_sentences(),
        size in 5usize..100,
        overlap in 0usize..50,
    ) {
        let window = SlidingWindow::new(WindowBudget::new(size, overlap).unwrap());
        let shingles = window.pack(&sentences, "doc");
        let runs = recover_runs(&shingles, &sentences).unwrap();

        // First chunk starts at the first sentence, last ends at the final
        // one, and no gap opens between consecutive runs. Deduplicating the
        // overlap therefore reproduces the sequence exactly.
        prop_assert_eq!(runs[0].0, 0);
        prop_assert_eq!(runs[runs.len() - 1].1, sentences.len() - 1);
        for pair in runs.windows(2) {
            prop_assert!(pair[1].0 <= pair[0].1 + 1, "gap between runs {:?}", pair);
            prop_assert!(pair[1].0 > pair[0].0, "no forward progress: {:?}", pair);
        }
    }

    #[test]
    fn window_tags_page_of_first_sentence(
        sentences in arb_sentences(),
        size in 5usize..100,
        overlap in 0usize..50,
    ) {
        let window = SlidingWindow::new(WindowBudget::new(size, overlap).unwrap());
        let shingles = window.pack(&sentences, "doc");
        let runs = recover_runs(&shingles, &sentences).unwrap();

        for (shingle, run) in shingles.iter().zip(&runs) {
            prop_assert_eq!(shingle.page, sentences[run.0].page);
        }
    }

    #[test]
    fn window_respects_size_for_multi_sentence_chunks(
        sentences in arb_sentences(),
        size in 5usize..100,
        overlap in 0usize..50,
    ) {
        let window = SlidingWindow::new(WindowBudget::new(size, overlap).unwrap());
        let shingles = window.pack(&sentences, "doc");
        let runs = recover_runs(&shingles, &sentences).unwrap();

        for (shingle, run) in shingles.iter().zip(&runs) {
            if run.1 > run.0 {
                prop_assert!(
                    shingle.char_len() <= size,
                    "multi-sentence chunk of {} chars exceeds budget {}",
                    shingle.char_len(),
                    size
                );
            }
        }
    }

    #[test]
    fn window_emits_at_most_one_chunk_per_sentence(
        sentences in arb_sentences(),
        size in 1usize..100,
        overlap in 0usize..200,
    ) {
        let window = SlidingWindow::new(WindowBudget::new(size, overlap).unwrap());
        let shingles = window.pack(&sentences, "doc");
        prop_assert!(shingles.len() <= sentences.len());
        prop_assert!(!shingles.is_empty());
    }

    #[test]
    fn window_is_deterministic(
        sentences in arb_sentences(),
        size in 5usize..100,
        overlap in 0usize..50,
    ) {
        let window = SlidingWindow::new(WindowBudget::new(size, overlap).unwrap());
        prop_assert_eq!(window.pack(&sentences, "doc"), window.pack(&sentences, "doc"));
    }
}

// =============================================================================
// SentenceSplitter Invariants
// =============================================================================

proptest! {
    #[test]
    fn splitter_fragments_are_trimmed_nonempty(text in arb_prose()) {
        let splitter = SentenceSplitter::default();
        let sentences = splitter.split(&Paragraph::new(0, text));

        for sentence in &sentences {
            prop_assert!(!sentence.text.trim().is_empty());
            prop_assert_eq!(sentence.text.trim(), sentence.text.as_str());
        }
    }

    #[test]
    fn splitter_preserves_non_whitespace_content(text in arb_prose()) {
        let splitter = SentenceSplitter::default();
        let sentences = splitter.split(&Paragraph::new(0, text.clone()));

        let rejoined: String = sentences
            .iter()
            .flat_map(|s| s.text.chars())
            .filter(|c| !c.is_whitespace())
            .collect();
        let original: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(rejoined, original);
    }
}

// =============================================================================
// ParagraphAssembler Invariants
// =============================================================================

proptest! {
    #[test]
    fn assembler_paragraphs_are_nonempty_with_ordered_pages(pages in arb_pages()) {
        let paragraphs = ParagraphAssembler::new(1).assemble(&pages);

        for pair in paragraphs.windows(2) {
            prop_assert!(pair[0].page <= pair[1].page);
        }
        for paragraph in &paragraphs {
            prop_assert!(!paragraph.text.trim().is_empty());
        }
    }
}
