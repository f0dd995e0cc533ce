//! hangeul-morph - a Korean morphological analyzer and phonological
//! processor.
//!
//! This library segments Korean text into morphemes tagged with a
//! Sejong-style part-of-speech set, runs the standard phonological
//! pipeline (aspiration, palatalization, liaison, neutralization,
//! tensification, assimilation) to predict pronunciation, and
//! romanizes either the pronunciation or the raw jamo.
//!
//! # Example
//!
//! ```rust
//! use hangeul_morph::Analyzer;
//!
//! let analyzer = Analyzer::new().unwrap();
//! let sentences = analyzer.analyze("친구가 학교에 갔습니다.");
//! assert!(!sentences.is_empty());
//!
//! assert_eq!(analyzer.pronounce("값이"), "갑씨");
//! assert_eq!(analyzer.romanize("값이"), "gapssi");
//! ```

pub mod analyzer;
pub mod conjugation;
pub mod constraints;
pub mod dictionary;
pub mod error;
pub mod hangul;
pub mod lattice;
pub mod phonology;
pub mod preprocessor;
pub mod romanize;
pub mod scorer;
pub mod tagset;

pub use analyzer::Analyzer;
pub use dictionary::{Dictionary, DictionarySource};
pub use error::{AnalyzerError, Result};
pub use lattice::{Confidence, Morpheme};
pub use tagset::{PosGroup, PosTag};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
