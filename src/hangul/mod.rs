//! Hangul syllable decomposition and composition.
//!
//! Every other component in the crate — the phonological rule pipeline,
//! the dictionary trie's key normalization, romanization — is built on
//! top of this arithmetic, so it lives at the bottom of the module graph
//! with no dependency on anything else in the crate.

mod tables;

pub use tables::{FINALS, INITIALS, MEDIALS};

/// A precomposed Hangul syllable split into its choseong/jungseong/jongseong
/// parts, or the grammatical slot an isolated Jamo occupies.
///
/// For a precomposed syllable `initial` and `medial` are always `Some`;
/// `final_` is `None` for an open syllable. For an isolated Jamo letter
/// exactly one field is `Some` — the slot that letter is valid in — and
/// the rest are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decomposition {
    pub initial: Option<char>,
    pub medial: Option<char>,
    pub final_: Option<char>,
}

impl Decomposition {
    fn empty() -> Self {
        Self::default()
    }
}

/// True for any code point in the modern precomposed syllable block, the
/// modern/old Hangul Jamo blocks, the Jamo Extended blocks, or the
/// Hangul Compatibility Jamo block used for standalone letters.
pub fn is_hangul(c: char) -> bool {
    let code = c as u32;
    (tables::SYLLABLE_BASE..=tables::SYLLABLE_END).contains(&code)
        || (0x1100..=0x11FF).contains(&code)
        || (0x3130..=0x318F).contains(&code)
        || (0xA960..=0xA97F).contains(&code)
        || (0xD7B0..=0xD7FF).contains(&code)
}

/// Decompose a single Hangul code point into its jamo parts.
///
/// Precomposed syllables decompose by direct index arithmetic. Isolated
/// compatibility jamo decompose into whichever single slot their letter
/// is valid in: a letter that is one of the 19 onsets lands in
/// `initial`, a vowel lands in `medial`, and a letter that is not a
/// valid onset but is a valid coda lands in `final_` (e.g. `ㄳ`). Any
/// non-Hangul input returns an all-`None` decomposition.
pub fn decompose(c: char) -> Decomposition {
    let code = c as u32;
    if (tables::SYLLABLE_BASE..=tables::SYLLABLE_END).contains(&code) {
        let offset = code - tables::SYLLABLE_BASE;
        let initial_idx = (offset / 588) as usize;
        let medial_idx = ((offset % 588) / 28) as usize;
        let final_idx = (offset % 28) as usize;
        return Decomposition {
            initial: Some(tables::INITIALS[initial_idx]),
            medial: Some(tables::MEDIALS[medial_idx]),
            final_: tables::FINALS[final_idx],
        };
    }

    if !is_hangul(c) {
        return Decomposition::empty();
    }

    if tables::initial_index(c).is_some() {
        return Decomposition {
            initial: Some(c),
            medial: None,
            final_: None,
        };
    }
    if tables::medial_index(c).is_some() {
        return Decomposition {
            initial: None,
            medial: Some(c),
            final_: None,
        };
    }
    if tables::final_index(Some(c)).is_some() {
        return Decomposition {
            initial: None,
            medial: None,
            final_: Some(c),
        };
    }

    Decomposition::empty()
}

/// Compose an initial/medial/final triple back into a precomposed
/// syllable. Returns `None` if `initial` or `medial` is not one of the
/// 19/21 valid jamo, or `final_` is `Some` but not one of the 27 valid
/// coda consonants — composition never guesses.
pub fn compose(initial: char, medial: char, final_: Option<char>) -> Option<char> {
    let initial_idx = tables::initial_index(initial)?;
    let medial_idx = tables::medial_index(medial)?;
    let final_idx = tables::final_index(final_)?;
    let code = (initial_idx as u32 * 21 + medial_idx as u32) * 28 + final_idx as u32
        + tables::SYLLABLE_BASE;
    char::from_u32(code)
}

/// True iff `c` is a precomposed syllable with a non-empty coda.
pub fn has_final(c: char) -> bool {
    let code = c as u32;
    if !(tables::SYLLABLE_BASE..=tables::SYLLABLE_END).contains(&code) {
        return false;
    }
    (code - tables::SYLLABLE_BASE) % 28 != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_open_syllable() {
        let d = decompose('가');
        assert_eq!(d.initial, Some('ㄱ'));
        assert_eq!(d.medial, Some('ㅏ'));
        assert_eq!(d.final_, None);
    }

    #[test]
    fn decompose_closed_syllable() {
        let d = decompose('밥');
        assert_eq!(d.initial, Some('ㅂ'));
        assert_eq!(d.medial, Some('ㅏ'));
        assert_eq!(d.final_, Some('ㅂ'));
    }

    #[test]
    fn decompose_cluster_final() {
        let d = decompose('값');
        assert_eq!(d.final_, Some('ㅄ'));
    }

    #[test]
    fn compose_round_trip_all_syllables() {
        for code in tables::SYLLABLE_BASE..=tables::SYLLABLE_END {
            let c = char::from_u32(code).unwrap();
            let d = decompose(c);
            let composed = compose(d.initial.unwrap(), d.medial.unwrap(), d.final_);
            assert_eq!(composed, Some(c), "round trip failed for {:?}", c);
        }
    }

    #[test]
    fn compose_rejects_invalid_parts() {
        assert_eq!(compose('a', 'ㅏ', None), None);
        assert_eq!(compose('ㄱ', 'ㅏ', Some('x')), None);
    }

    #[test]
    fn has_final_detects_open_vs_closed() {
        assert!(!has_final('가'));
        assert!(has_final('밥'));
    }

    #[test]
    fn is_hangul_excludes_ascii_and_other_scripts() {
        assert!(is_hangul('가'));
        assert!(is_hangul('ㄱ'));
        assert!(!is_hangul('a'));
        assert!(!is_hangul('漢'));
    }

    #[test]
    fn decompose_isolated_consonant_and_vowel() {
        let consonant = decompose('ㄱ');
        assert_eq!(consonant.initial, Some('ㄱ'));
        assert_eq!(consonant.medial, None);

        let vowel = decompose('ㅏ');
        assert_eq!(vowel.medial, Some('ㅏ'));
        assert_eq!(vowel.initial, None);
    }

    #[test]
    fn decompose_non_hangul_is_empty() {
        assert_eq!(decompose('a'), Decomposition::empty());
    }
}
