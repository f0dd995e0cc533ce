//! The decoded unit the lattice produces: a surface span tagged with a
//! POS, a lemma, and (for conjugated or composite dictionary matches)
//! the sub-morphemes it was assembled from.

use serde::{Deserialize, Serialize};

use crate::tagset::PosTag;

/// A score in `[0.0, 1.0]`, clamped at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f32);

impl Confidence {
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    pub pos: PosTag,
    pub lemma: String,
    pub confidence: Confidence,
    /// Half-open `[start, end)` char offsets into the sentence this
    /// morpheme was decoded from.
    pub start: usize,
    pub end: usize,
    /// Populated for conjugated surfaces and composite dictionary
    /// matches, whose lemma is the concatenation of its parts' lemmas.
    pub sub_morphemes: Vec<Morpheme>,
}

impl Morpheme {
    pub fn simple(surface: &str, pos: PosTag, lemma: &str, start: usize, end: usize) -> Self {
        Self {
            surface: surface.to_string(),
            pos,
            lemma: lemma.to_string(),
            confidence: Confidence::default(),
            start,
            end,
            sub_morphemes: Vec::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_sub_morphemes(mut self, subs: Vec<Morpheme>) -> Self {
        self.sub_morphemes = subs;
        self
    }
}
