//! Error types for shingles.

/// Errors that can occur while building shingles.
//
// Note: implemented by hand rather than via `#[derive(thiserror::Error)]`
// because the `Extraction` variant carries a field named `source` (a document
// identifier string, not an error source). thiserror unconditionally treats a
// field named `source` as the `Error::source()` value and requires it to
// implement `std::error::Error`, which `String` does not, so the derive fails
// to compile. The `Display` output below is byte-for-byte identical to what
// the original `#[error("...")]` attributes specified.
#[derive(Debug)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    InvalidChunkSize(usize),

    /// The upstream extractor could not read or parse the document.
    ///
    /// Not retried here; surfaced to the caller as-is. An empty document is
    /// not an extraction failure; it yields zero shingles instead.
    Extraction {
        /// Identifier of the document that failed.
        source: String,
        /// Extractor-reported reason.
        reason: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChunkSize(size) => {
                write!(f, "invalid chunk size: {size} (must be > 0)")
            }
            Self::Extraction { source, reason } => {
                write!(f, "text extraction failed for {source}: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for shingles operations.
pub type Result<T> = std::result::Result<T, Error>;
