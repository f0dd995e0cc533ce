//! Romanization: a phonetic table that romanizes pronunciation (after
//! running the phonological pipeline) and a literal table that
//! transliterates raw jamo without any phonological interpretation.

use phf::phf_map;

use crate::hangul::{self, decompose};
use crate::phonology::pronounce;

static ONSET: phf::Map<char, &'static str> = phf_map! {
    'ㄱ' => "g", 'ㄲ' => "kk", 'ㄴ' => "n", 'ㄷ' => "d", 'ㄸ' => "tt",
    'ㄹ' => "r", 'ㅁ' => "m", 'ㅂ' => "b", 'ㅃ' => "pp", 'ㅅ' => "s",
    'ㅆ' => "ss", 'ㅇ' => "", 'ㅈ' => "j", 'ㅉ' => "jj", 'ㅊ' => "ch",
    'ㅋ' => "k", 'ㅌ' => "t", 'ㅍ' => "p", 'ㅎ' => "h",
};

static MEDIAL: phf::Map<char, &'static str> = phf_map! {
    'ㅏ' => "a", 'ㅐ' => "ae", 'ㅑ' => "ya", 'ㅒ' => "yae", 'ㅓ' => "eo",
    'ㅔ' => "e", 'ㅕ' => "yeo", 'ㅖ' => "ye", 'ㅗ' => "o", 'ㅘ' => "wa",
    'ㅙ' => "wae", 'ㅚ' => "oe", 'ㅛ' => "yo", 'ㅜ' => "u", 'ㅝ' => "wo",
    'ㅞ' => "we", 'ㅟ' => "wi", 'ㅠ' => "yu", 'ㅡ' => "eu", 'ㅢ' => "ui",
    'ㅣ' => "i",
};

/// Coda romanization after the phonological pipeline has already
/// reduced every final to one of the seven permitted codas.
static PHONETIC_FINAL: phf::Map<char, &'static str> = phf_map! {
    'ㄱ' => "k", 'ㄴ' => "n", 'ㄷ' => "t", 'ㄹ' => "l", 'ㅁ' => "m",
    'ㅂ' => "p", 'ㅇ' => "ng",
};

/// Coda romanization for raw, un-pronounced jamo, including the
/// complex clusters decomposition can still hold.
static LITERAL_FINAL: phf::Map<char, &'static str> = phf_map! {
    'ㄱ' => "g", 'ㄲ' => "gg", 'ㄳ' => "gs", 'ㄴ' => "n", 'ㄵ' => "nj",
    'ㄶ' => "nh", 'ㄷ' => "d", 'ㄹ' => "l", 'ㄺ' => "lg", 'ㄻ' => "lm",
    'ㄼ' => "lb", 'ㄽ' => "ls", 'ㄾ' => "lt", 'ㄿ' => "lp", 'ㅀ' => "lh",
    'ㅁ' => "m", 'ㅂ' => "b", 'ㅄ' => "bs", 'ㅅ' => "s", 'ㅆ' => "ss",
    'ㅇ' => "ng", 'ㅈ' => "j", 'ㅊ' => "ch", 'ㅋ' => "k", 'ㅌ' => "t",
    'ㅍ' => "p", 'ㅎ' => "h",
};

fn onset_str(c: char) -> &'static str {
    ONSET.get(&c).copied().unwrap_or("")
}

fn medial_str(c: char) -> &'static str {
    MEDIAL.get(&c).copied().unwrap_or("")
}

fn phonetic_final_str(c: char) -> &'static str {
    PHONETIC_FINAL.get(&c).copied().unwrap_or("")
}

fn literal_final_str(c: char) -> &'static str {
    LITERAL_FINAL.get(&c).copied().unwrap_or("")
}

fn render(
    text: &str,
    final_str: fn(char) -> &'static str,
    liquid_sensitive: bool,
) -> String {
    let mut out = String::new();
    let mut prev_final_was_rieul = false;
    for c in text.chars() {
        if !hangul::is_hangul(c) {
            out.push(c);
            prev_final_was_rieul = false;
            continue;
        }
        let d = decompose(c);
        match (d.initial, d.medial) {
            (Some(initial), Some(medial)) => {
                if liquid_sensitive && initial == 'ㄹ' && prev_final_was_rieul {
                    out.push_str("l");
                } else {
                    out.push_str(onset_str(initial));
                }
                out.push_str(medial_str(medial));
                if let Some(f) = d.final_ {
                    out.push_str(final_str(f));
                }
                prev_final_was_rieul = d.final_ == Some('ㄹ');
            }
            _ => {
                // Isolated jamo: render whichever slot is populated using
                // the same letter tables, best-effort.
                if let Some(i) = d.initial {
                    out.push_str(onset_str(i));
                } else if let Some(m) = d.medial {
                    out.push_str(medial_str(m));
                } else if let Some(f) = d.final_ {
                    out.push_str(final_str(f));
                }
                prev_final_was_rieul = false;
            }
        }
    }
    out
}

/// Romanize the pronunciation: run the standard phonological pipeline
/// first, then map the result through the phonetic tables, with
/// ㄹ onset/coda liquid sensitivity (r/l, or l/l across an adjacent
/// ㄹ-ㄹ boundary).
pub fn romanize(text: &str) -> String {
    let pronounced = pronounce(text);
    render(&pronounced, phonetic_final_str, true)
}

/// Transliterate raw jamo letter-for-letter, without running the
/// phonological pipeline.
pub fn romanize_standard(text: &str) -> String {
    render(text, literal_final_str, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phonetic_romanization_fixture_ilkko() {
        assert_eq!(romanize("읽고"), "ilkko");
    }

    #[test]
    fn phonetic_romanization_fixture_gapssi() {
        assert_eq!(romanize("값이"), "gapssi");
    }

    #[test]
    fn phonetic_romanization_fixture_dongnip() {
        assert_eq!(romanize("독립"), "dongnip");
    }

    #[test]
    fn literal_romanization_is_injective_over_distinct_syllables() {
        let a = romanize_standard("값");
        let b = romanize_standard("갑");
        assert_ne!(a, b);
    }

    #[test]
    fn literal_romanization_skips_phonology() {
        // 읽 literally keeps its ㄺ cluster rather than collapsing it.
        assert_eq!(romanize_standard("읽"), "ilg");
    }

    #[test]
    fn non_hangul_passes_through_both_tables() {
        assert_eq!(romanize("2024"), "2024");
        assert_eq!(romanize_standard("2024"), "2024");
    }
}
