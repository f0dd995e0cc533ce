//! The public facade: a built dictionary plus scorer and validator,
//! exposing morphological analysis, pronunciation, and romanization as
//! one entry point.

use std::collections::HashMap;

use crate::constraints::ConstraintValidator;
use crate::dictionary::{Dictionary, DictionarySource};
use crate::error::Result;
use crate::lattice::{self, Morpheme};
use crate::phonology;
use crate::preprocessor;
use crate::romanize;
use crate::scorer::{Scorer, TransitionModel};
use crate::tagset::PosTag;

/// A built Korean morphological analyzer and phonological processor.
pub struct Analyzer {
    dictionary: Dictionary,
    scorer: Scorer,
    validator: ConstraintValidator,
    /// Eojeol surfaces taught via [`Analyzer::train_eojeol`], substituted
    /// verbatim wherever that exact whitespace-delimited token recurs.
    trained: HashMap<String, Vec<(PosTag, String)>>,
}

impl Analyzer {
    /// Build an analyzer over the embedded seed dictionary.
    pub fn new() -> Result<Self> {
        Ok(Self::with_dictionary(Dictionary::build(DictionarySource::Defaults)?))
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            scorer: Scorer::new(TransitionModel::default()),
            validator: ConstraintValidator::new(),
            trained: HashMap::new(),
        }
    }

    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Teach the analyzer the correct decomposition of a whole eojeol:
    /// `morphemes` is the ordered `(POS, surface)` sequence whose
    /// surfaces concatenate back to `surface`. Future `analyze` calls
    /// emit it verbatim wherever that exact token recurs, bypassing the
    /// lattice decoder for that span.
    pub fn train_eojeol(&mut self, surface: &str, morphemes: Vec<(PosTag, String)>) {
        self.trained.insert(surface.to_string(), morphemes);
    }

    /// Analyze `text` sentence by sentence.
    pub fn analyze(&self, text: &str) -> Vec<Vec<Morpheme>> {
        preprocessor::split_sentences(text)
            .iter()
            .map(|sentence| self.analyze_sentence(sentence))
            .collect()
    }

    fn analyze_sentence(&self, sentence: &str) -> Vec<Morpheme> {
        if self.trained.is_empty() {
            return lattice::decode(sentence, &self.dictionary, &self.scorer, &self.validator);
        }

        let chars: Vec<char> = sentence.chars().collect();
        let mut out = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if chars[i].is_whitespace() {
                i += 1;
                continue;
            }
            let start = i;
            while i < chars.len() && !chars[i].is_whitespace() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if let Some(parts) = self.trained.get(&word) {
                let mut cursor = start;
                for (pos, part_surface) in parts {
                    let part_len = part_surface.chars().count();
                    out.push(Morpheme::simple(part_surface, *pos, part_surface, cursor, cursor + part_len));
                    cursor += part_len;
                }
            } else {
                out.extend(lattice::shift(
                    lattice::decode(&word, &self.dictionary, &self.scorer, &self.validator),
                    start,
                ));
            }
        }
        out
    }

    /// Run the phonological pipeline and return the pronounced text.
    pub fn pronounce(&self, text: &str) -> String {
        phonology::pronounce(text)
    }

    /// Romanization of the pronunciation: runs the phonological
    /// pipeline first, then maps the result through the phonetic
    /// romanization tables.
    pub fn romanize(&self, text: &str) -> String {
        romanize::romanize(text)
    }

    /// Literal (pipeline-free) jamo transliteration.
    pub fn romanize_standard(&self, text: &str) -> String {
        romanize::romanize_standard(text)
    }

    pub fn is_dictionary_compiled(&self) -> bool {
        self.dictionary.is_compiled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_fixture_sentence() {
        let analyzer = Analyzer::new().unwrap();
        let sentences = analyzer.analyze("친구가 학교에 갔습니다.");
        assert_eq!(sentences.len(), 1);
        let surfaces: Vec<&str> = sentences[0].iter().map(|m| m.surface.as_str()).collect();
        assert!(surfaces.contains(&"친구"));
        assert!(surfaces.contains(&"가"));
    }

    #[test]
    fn trained_eojeol_overrides_decoder() {
        let mut analyzer = Analyzer::new().unwrap();
        analyzer.train_eojeol(
            "외않되",
            vec![(PosTag::MAG, "왜".to_string()), (PosTag::NA, "않되".to_string())],
        );
        let sentences = analyzer.analyze("외않되");
        let surfaces: Vec<&str> = sentences[0].iter().map(|m| m.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["왜", "않되"]);
    }

    #[test]
    fn pronounce_and_romanize_delegate_to_their_modules() {
        let analyzer = Analyzer::new().unwrap();
        assert_eq!(analyzer.pronounce("값이"), "갑씨");
        assert_eq!(analyzer.romanize("값이"), "gapssi");
        assert_eq!(analyzer.romanize_standard("값이"), "gabsi");
    }

    #[test]
    fn empty_text_analyzes_to_no_sentences() {
        let analyzer = Analyzer::new().unwrap();
        assert!(analyzer.analyze("").is_empty());
    }
}
