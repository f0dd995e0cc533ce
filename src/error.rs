//! Error taxonomy for the analyzer and phonology core.
//!
//! Mirrors the three-way split in the design: programmer errors the
//! caller must not retry past (`InvariantViolation`), corrupt input data
//! (`DataCorruption`), and a resource condition that the trie recovers
//! from internally (`ResourceExhaustion`). Analysis itself never returns
//! an error — unmatched spans degrade to OOV morphemes instead.

use thiserror::Error;

/// Errors surfaced by the dictionary, archive, and control-plane APIs.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A caller violated an invariant the core does not recover from:
    /// inserting into a trie after a finalized build, decomposing a
    /// non-Hangul code point with `compose`, or a composite-tag split
    /// whose surface could not be reconstructed.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The dictionary archive is malformed: bad magic bytes, or a
    /// declared file offset/size outside the archive.
    #[error("corrupt dictionary archive: {0}")]
    DataCorruption(String),

    /// The double-array trie ran out of allocatable base offsets after
    /// expansion retries. Callers never see this variant directly —
    /// `Dictionary::build` catches it and falls back to the plain-trie
    /// backend — it exists so the fallback path has a named condition
    /// to log and test against.
    #[error("double-array trie exhausted its address space")]
    ResourceExhaustion,
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
