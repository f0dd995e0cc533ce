//! Regular conjugation: vowel contraction, vowel harmony, and the ㅆ
//! past-tense marker, for surfaces that are not themselves dictionary
//! keys but end in one of the four regular endings.

use crate::hangul::{compose, decompose};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularCandidate {
    pub stem: String,
    pub ending: String,
}

/// Vowel-harmony series: a stem medial in the 아-series pairs with 아
/// endings, the 어-series with 어.
fn harmony_series(medial: char) -> Option<&'static str> {
    match medial {
        'ㅏ' | 'ㅗ' | 'ㅘ' => Some("아"),
        'ㅓ' | 'ㅜ' | 'ㅝ' | 'ㅣ' | 'ㅔ' | 'ㅐ' => Some("어"),
        _ => None,
    }
}

/// Attempt to split `surface`'s last syllable into a (stem, ending)
/// pair explained by the ㅆ past-tense marker or a vowel contraction.
pub fn restore(surface: &str) -> Option<RegularCandidate> {
    let chars: Vec<char> = surface.chars().collect();
    let last = *chars.last()?;
    let d = decompose(last);

    // Past-tense ㅆ marker: the surfaced final consonant IS the marker;
    // everything up to and including the vowel is the stem, and the
    // tense borrows the stem's own vowel-harmony series.
    if d.final_ == Some('ㅆ') {
        let stem_last = compose(d.initial?, d.medial?, None)?;
        let series = harmony_series(d.medial?)?;
        let mut stem: String = chars[..chars.len() - 1].iter().collect();
        stem.push(stem_last);
        let ending = match series {
            "아" => "았",
            _ => "었",
        };
        return Some(RegularCandidate {
            stem,
            ending: ending.to_string(),
        });
    }

    // Vowel contraction: the surfaced syllable already fuses the
    // stem's vowel with the 아/어 ending (e.g. 오 + 아 -> 와, or the
    // stem vowel and ending are simply identical and merge, 가 + 아 ->
    // 가). Only syllables whose medial already is a contracted glide
    // (ㅘ, ㅝ) are treated as contractions here; bare vowel endings are
    // left to the dictionary/irregular paths.
    if d.final_.is_none() {
        let (base_medial, ending) = match d.medial? {
            'ㅘ' => ('ㅗ', "아"),
            'ㅝ' => ('ㅜ', "어"),
            _ => return None,
        };
        let stem_last = compose(d.initial?, base_medial, None)?;
        let mut stem: String = chars[..chars.len() - 1].iter().collect();
        stem.push(stem_last);
        return Some(RegularCandidate {
            stem,
            ending: ending.to_string(),
        });
    }

    None
}
