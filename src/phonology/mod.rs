//! The phonological rule pipeline: text in, pronounced text out.

mod rules;

pub use rules::{
    default_pipeline, Aspiration, Assimilation, Liaison, Neutralization, Palatalization,
    PhonologicalRule, Tensification,
};

use crate::hangul;

/// One code point split into its decomposed Hangul slots, or carried
/// through unchanged if it is not Hangul.
///
/// `original_final` is set once at construction and never mutated
/// afterward — the tensification rule needs to see the pre-neutralization
/// cluster even after `final_` has been simplified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phoneme {
    pub original: char,
    pub is_hangul: bool,
    pub initial: Option<char>,
    pub medial: Option<char>,
    pub final_: Option<char>,
    pub original_final: Option<char>,
}

impl Phoneme {
    fn from_char(c: char) -> Self {
        if hangul::is_hangul(c) {
            let d = hangul::decompose(c);
            Phoneme {
                original: c,
                is_hangul: true,
                initial: d.initial,
                medial: d.medial,
                final_: d.final_,
                original_final: d.final_,
            }
        } else {
            Phoneme {
                original: c,
                is_hangul: false,
                initial: None,
                medial: None,
                final_: None,
                original_final: None,
            }
        }
    }

    fn recompose(&self) -> char {
        if self.is_hangul {
            if let (Some(i), Some(m)) = (self.initial, self.medial) {
                if let Some(c) = hangul::compose(i, m, self.final_) {
                    return c;
                }
            }
        }
        self.original
    }
}

fn to_phonemes(text: &str) -> Vec<Phoneme> {
    text.chars().map(Phoneme::from_char).collect()
}

fn recompose_all(phonemes: &[Phoneme]) -> String {
    phonemes.iter().map(Phoneme::recompose).collect()
}

/// Run an explicit rule pipeline over `text`, in order, then recompose.
/// Each rule mutates the phoneme sequence in place before the next
/// rule runs.
pub fn apply_pipeline(text: &str, pipeline: &[Box<dyn PhonologicalRule>]) -> String {
    let mut phonemes = to_phonemes(text);
    for rule in pipeline {
        rule.apply(&mut phonemes);
    }
    recompose_all(&phonemes)
}

/// Convenience entry point running the standard six-stage pipeline.
pub fn pronounce(text: &str) -> String {
    apply_pipeline(text, &default_pipeline())
}
