//! End-to-end conformance fixtures: the input -> expected-output table
//! and the invariants that must hold for every input, not just the
//! fixtures below.

use hangeul_morph::hangul::{compose, decompose, is_hangul};
use hangeul_morph::tagset::PosTag;
use hangeul_morph::Analyzer;

fn analyzer() -> Analyzer {
    Analyzer::new().expect("seed dictionary builds")
}

// ---------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------

#[test]
fn analyze_full_sentence_fixture() {
    let a = analyzer();
    let sentences = a.analyze("친구가 학교에 갔습니다.");
    assert_eq!(sentences.len(), 1);
    let morphemes = &sentences[0];

    let surfaces: Vec<&str> = morphemes.iter().map(|m| m.surface.as_str()).collect();
    assert!(surfaces.contains(&"친구"));
    assert!(surfaces.contains(&"학교"));

    let last = morphemes.last().unwrap();
    assert_eq!(last.surface, ".");
    assert_eq!(last.pos, PosTag::SF);

    let composite = morphemes
        .iter()
        .find(|m| !m.sub_morphemes.is_empty())
        .expect("the past-tense form 갔 should decompose into stem + ending");
    assert_eq!(composite.sub_morphemes[0].lemma, "가다");
    assert_eq!(composite.sub_morphemes[0].pos, PosTag::VV);
    assert_eq!(composite.sub_morphemes[1].pos, PosTag::EP);
}

#[test]
fn pronounce_fixture_table() {
    let a = analyzer();
    assert_eq!(a.pronounce("밥이"), "바비");
    assert_eq!(a.pronounce("독립"), "동닙");
    assert_eq!(a.pronounce("값이"), "갑씨");
    assert_eq!(a.pronounce("읽고"), "일꼬");
    assert_eq!(a.pronounce("같이"), "가치");
    assert_eq!(a.pronounce("앉다"), "안따");
    assert_eq!(a.pronounce("싫어"), "시러");
    assert_eq!(a.pronounce("놓고"), "노코");
}

#[test]
fn romanize_fixture_table() {
    let a = analyzer();
    assert_eq!(a.romanize("읽고"), "ilkko");
    assert_eq!(a.romanize_standard("읽고"), "ilggo");
    assert_eq!(a.romanize("값이"), "gapssi");
    assert_eq!(a.romanize("독립"), "dongnip");
}

// ---------------------------------------------------------------------
// Boundary behaviors
// ---------------------------------------------------------------------

#[test]
fn empty_input_yields_empty_output_everywhere() {
    let a = analyzer();
    assert!(a.analyze("").is_empty());
    assert_eq!(a.pronounce(""), "");
    assert_eq!(a.romanize(""), "");
    assert_eq!(a.romanize_standard(""), "");
}

#[test]
fn non_hangul_passes_through_decoder_and_pronunciation() {
    let a = analyzer();
    let sentences = a.analyze("ABC 123?");
    let morphemes = &sentences[0];
    assert!(morphemes
        .iter()
        .any(|m| m.surface == "ABC" && m.pos == PosTag::SL));
    assert!(morphemes
        .iter()
        .any(|m| m.surface == "123" && m.pos == PosTag::SN));
    assert!(morphemes.iter().any(|m| m.surface == "?" && m.pos == PosTag::SF));
    assert_eq!(a.pronounce("ABC 123?"), "ABC 123?");
}

#[test]
fn all_oov_input_completes_with_one_nng_morpheme_per_split() {
    let a = analyzer();
    let sentences = a.analyze("힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣");
    let morphemes = &sentences[0];
    assert!(!morphemes.is_empty());
    assert!(morphemes.iter().all(|m| m.pos == PosTag::NNG));
    let covered: usize = morphemes.iter().map(|m| m.end - m.start).sum();
    assert_eq!(covered, "힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣힣".chars().count());
}

// ---------------------------------------------------------------------
// Invariants, checked over a small battery of inputs rather than a
// single fixture, since each is meant to hold for all inputs.
// ---------------------------------------------------------------------

const SAMPLE_SENTENCES: &[&str] = &[
    "친구가 학교에 갔습니다.",
    "오늘은 좋은 날이다.",
    "값이 읽고 독립 같이 앉다 싫어 놓고",
    "ABC 123 친구!",
    "",
];

#[test]
fn coverage_invariant_surfaces_concatenate_to_input_minus_whitespace() {
    let a = analyzer();
    for &text in SAMPLE_SENTENCES {
        let sentences = a.analyze(text);
        let concatenated: String = sentences
            .iter()
            .flat_map(|s| s.iter())
            .map(|m| m.surface.as_str())
            .collect();
        let expected: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(concatenated, expected, "coverage failed for {text:?}");
    }
}

#[test]
fn hangul_compose_decompose_round_trips_every_modern_syllable() {
    // Sample across the syllable block rather than all 11,172 to keep
    // the test fast; steps of 37 cover every initial/medial combination
    // at least once given the block's layout.
    let mut c = 0xAC00u32;
    while c <= 0xD7A3 {
        let ch = char::from_u32(c).unwrap();
        let d = decompose(ch);
        let recomposed = compose(d.initial.unwrap(), d.medial.unwrap(), d.final_).unwrap();
        assert_eq!(recomposed, ch);
        c += 37;
    }
}

#[test]
fn liaison_is_exhaustive_after_pronunciation() {
    let a = analyzer();
    for &text in &["값이", "밥이", "독립을", "집에", "꽃 아래"] {
        let pronounced = a.pronounce(text);
        let chars: Vec<char> = pronounced.chars().collect();
        for i in 0..chars.len() {
            if !is_hangul(chars[i]) {
                continue;
            }
            let d = decompose(chars[i]);
            if d.final_.is_none() {
                continue;
            }
            if let Some(&next) = chars.get(i + 1) {
                if is_hangul(next) {
                    let nd = decompose(next);
                    assert!(
                        !(nd.initial == Some('ㅇ') && nd.medial.is_some()),
                        "coda {:?} should have migrated before {:?} in {pronounced:?}",
                        d.final_,
                        next
                    );
                }
            }
        }
    }
}

#[test]
fn neutralization_invariant_only_seven_codas_survive() {
    let a = analyzer();
    const PERMITTED: &[char] = &['ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅇ'];
    for &text in &["값이", "독립", "읽고", "같이", "앉다", "싫어", "놓고", "닭", "여덟"] {
        let pronounced = a.pronounce(text);
        for c in pronounced.chars() {
            if !is_hangul(c) {
                continue;
            }
            if let Some(f) = decompose(c).final_ {
                assert!(PERMITTED.contains(&f), "illegal final {f:?} in {pronounced:?}");
            }
        }
    }
}

#[test]
fn tensification_hallmark_no_bare_obstruent_plus_lenis_onset() {
    let a = analyzer();
    const OBSTRUENT_FINALS: &[char] = &['ㄱ', 'ㄷ', 'ㅂ'];
    const LENIS_ONSETS: &[char] = &['ㄱ', 'ㄷ', 'ㅂ', 'ㅅ', 'ㅈ'];
    for &text in &["값이", "독립", "읽고", "같이", "앉다", "싫어", "놓고"] {
        let pronounced = a.pronounce(text);
        let chars: Vec<char> = pronounced.chars().collect();
        for i in 0..chars.len() {
            if !is_hangul(chars[i]) {
                continue;
            }
            let d = decompose(chars[i]);
            let Some(f) = d.final_ else { continue };
            if !OBSTRUENT_FINALS.contains(&f) {
                continue;
            }
            if let Some(&next) = chars.get(i + 1) {
                if is_hangul(next) {
                    let onset = decompose(next).initial.unwrap();
                    if LENIS_ONSETS.contains(&onset) {
                        panic!("lenis onset {onset:?} survived after obstruent final {f:?} in {pronounced:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn decoding_and_pronunciation_are_deterministic() {
    let a = analyzer();
    for &text in SAMPLE_SENTENCES {
        assert_eq!(a.analyze(text), a.analyze(text));
        assert_eq!(a.pronounce(text), a.pronounce(text));
    }
}

#[test]
fn pronunciation_is_idempotent() {
    let a = analyzer();
    for &text in SAMPLE_SENTENCES {
        let once = a.pronounce(text);
        let twice = a.pronounce(&once);
        assert_eq!(once, twice, "pronounce should be idempotent for {text:?}");
    }
}

#[test]
fn literal_romanization_is_injective_over_a_limited_vocabulary() {
    let a = analyzer();
    let words = ["값", "갑", "닭", "달", "읽", "일", "흙", "흑"];
    let romanized: Vec<String> = words.iter().map(|w| a.romanize_standard(w)).collect();
    for i in 0..romanized.len() {
        for j in (i + 1)..romanized.len() {
            assert_ne!(
                romanized[i], romanized[j],
                "{:?} and {:?} collided under literal romanization",
                words[i], words[j]
            );
        }
    }
}
