//! Page-Aware Chunking
//!
//! The minimal example: turn extracted page lines into overlapping chunks.
//!
//! ```bash
//! cargo run --example pipeline
//! ```

use shingles::{PageText, Pipeline, WindowBudget};

fn main() {
    // What a PDF extractor typically hands over: wrapped lines, a hyphen
    // split at the margin, a blank line between paragraphs.
    let pages = vec![
        PageText::new(
            0,
            [
                "Machine learning models learn pat-",
                "terns from data. They generalize these",
                "patterns to make predictions.",
                "",
                "Deep learning extends this with many",
                "hidden layers. Each layer learns more",
                "abstract representations.",
            ],
        ),
        PageText::new(1, ["Training requires data. Lots of it."]),
    ];

    let pipeline = Pipeline::new().with_budget(WindowBudget::new(120, 40).unwrap());
    let shingles = pipeline.run("ml_notes.pdf", &pages);

    println!("Shingles: {}\n", shingles.len());
    for (i, shingle) in shingles.iter().enumerate() {
        println!(
            "[{}] page {} ({} chars): {:?}",
            i,
            shingle.page,
            shingle.char_len(),
            shingle.content
        );
    }

    // Each shingle is small enough to embed, overlaps its neighbor, and
    // remembers the page it came from.
}
