//! The morpheme lattice decoder: a Viterbi-style shortest-path search
//! over dictionary, conjugation, and OOV candidates.

pub mod morpheme;

pub use morpheme::{Confidence, Morpheme};

use crate::conjugation::{irregular, regular};
use crate::constraints::ConstraintValidator;
use crate::dictionary::Dictionary;
use crate::preprocessor::{self, TokenKind};
use crate::scorer::Scorer;
use crate::tagset::PosTag;

const DICT_WINDOW: usize = 16;
const CONJ_WINDOW: usize = 8;
const OOV_WINDOW: usize = 16;

/// One edge into a lattice position: a span `[start, end)` ending at
/// the position this candidate was generated for, with the cost of
/// taking that edge and the POS values the constraint validator and
/// next candidate's transition cost need.
struct Candidate {
    start: usize,
    cost: f32,
    /// POS checked against the previous morpheme's trailing POS.
    entry_pos: PosTag,
    /// POS exposed to whatever comes after this span.
    trailing_pos: PosTag,
    pos: PosTag,
    lemma: String,
    confidence: Confidence,
    sub_morphemes: Vec<Morpheme>,
}

fn ending_pos_for(ending: &str) -> PosTag {
    const ETM: &[&str] = &["은", "는", "을", "ㄹ", "던", "ㄴ"];
    const EF: &[&str] = &["다", "요", "죠", "습니다", "ㅂ니다", "구나", "군"];
    const EC: &[&str] = &["고", "며", "면서", "아", "어", "게", "지", "니", "니까"];
    const EP: &[&str] = &["았", "었", "겠", "시"];

    if ETM.contains(&ending) {
        PosTag::ETM
    } else if EF.contains(&ending) {
        PosTag::EF
    } else if EC.contains(&ending) {
        PosTag::EC
    } else if EP.contains(&ending) {
        PosTag::EP
    } else {
        PosTag::EP
    }
}

fn compound_pos(pattern: &str) -> PosTag {
    match pattern {
        "하다" | "되다" | "시키다" => PosTag::XSV,
        "거리" => PosTag::XSN,
        _ => PosTag::NNG,
    }
}

fn build_conjugation_candidate(
    dictionary: &Dictionary,
    scorer: &Scorer,
    start: usize,
    stem: &str,
    ending: &str,
) -> Option<Candidate> {
    let lemma_form = format!("{stem}다");
    let (predicate_pos, _) = dictionary
        .search(&lemma_form)
        .into_iter()
        .find(|(pos, _)| pos.is_predicate())?;

    let stem_len = stem.chars().count();
    let ending_len = ending.chars().count();
    let span_len = stem_len + ending_len;
    let ending_pos = ending_pos_for(ending);

    let stem_morpheme =
        Morpheme::simple(stem, predicate_pos, &lemma_form, start, start + stem_len);
    let ending_morpheme = Morpheme::simple(
        ending,
        ending_pos,
        ending,
        start + stem_len,
        start + span_len,
    );

    Some(Candidate {
        start,
        cost: scorer.conjugation_base() + scorer.length_prior(span_len),
        entry_pos: predicate_pos,
        trailing_pos: ending_pos,
        pos: predicate_pos,
        lemma: lemma_form,
        confidence: Confidence::new(0.8),
        sub_morphemes: vec![stem_morpheme, ending_morpheme],
    })
}

/// Every candidate edge ending at position `i` in `chars`.
fn candidates_ending_at(
    i: usize,
    chars: &[char],
    dict_matches_by_end: &[Vec<(usize, Vec<(PosTag, String)>)>],
    dictionary: &Dictionary,
    scorer: &Scorer,
) -> Vec<Candidate> {
    let mut out = Vec::new();

    for (start, patterns) in &dict_matches_by_end[i] {
        let length = i - start;
        if length == 0 || length > DICT_WINDOW {
            continue;
        }
        for (pos, lemma) in patterns {
            out.push(Candidate {
                start: *start,
                cost: scorer.length_prior(length) + scorer.local_bonus(*pos, length),
                entry_pos: *pos,
                trailing_pos: *pos,
                pos: *pos,
                lemma: lemma.clone(),
                confidence: Confidence::new(1.0),
                sub_morphemes: Vec::new(),
            });
        }
    }

    for start in i.saturating_sub(DICT_WINDOW)..i {
        if let Some(length) = preprocessor::compound_match_len(chars, start) {
            if start + length == i {
                let pattern: String = chars[start..i].iter().collect();
                let pos = compound_pos(&pattern);
                out.push(Candidate {
                    start,
                    cost: scorer.length_prior(length),
                    entry_pos: pos,
                    trailing_pos: pos,
                    pos,
                    lemma: pattern,
                    confidence: Confidence::new(0.9),
                    sub_morphemes: Vec::new(),
                });
            }
        }
    }

    for start in i.saturating_sub(CONJ_WINDOW)..i {
        let span: String = chars[start..i].iter().collect();
        for candidate in irregular::restore_any(&span) {
            if let Some(c) =
                build_conjugation_candidate(dictionary, scorer, start, &candidate.stem, &candidate.ending)
            {
                out.push(c);
            }
        }
        if let Some(candidate) = regular::restore(&span) {
            if let Some(c) =
                build_conjugation_candidate(dictionary, scorer, start, &candidate.stem, &candidate.ending)
            {
                out.push(c);
            }
        }
    }

    for start in i.saturating_sub(OOV_WINDOW)..i {
        let length = i - start;
        let surface: String = chars[start..i].iter().collect();
        out.push(Candidate {
            start,
            cost: scorer.oov_penalty() + scorer.length_prior(length),
            entry_pos: PosTag::NNG,
            trailing_pos: PosTag::NNG,
            pos: PosTag::NNG,
            lemma: surface,
            confidence: Confidence::new(0.5),
            sub_morphemes: Vec::new(),
        });
    }

    out
}

/// Decode one run of Hangul characters into the cheapest sequence of
/// morphemes, offsets relative to the start of `chars`.
fn decode_span(
    chars: &[char],
    dictionary: &Dictionary,
    scorer: &Scorer,
    validator: &ConstraintValidator,
) -> Vec<Morpheme> {
    let len = chars.len();
    if len == 0 {
        return Vec::new();
    }
    let run_text: String = chars.iter().collect();

    let mut dict_matches_by_end: Vec<Vec<(usize, Vec<(PosTag, String)>)>> = vec![Vec::new(); len + 1];
    for (start, length, patterns) in dictionary.search_all_patterns(&run_text) {
        dict_matches_by_end[start + length].push((start, patterns));
    }

    let mut dp = vec![f32::INFINITY; len + 1];
    let mut back: Vec<Option<usize>> = vec![None; len + 1];
    let mut chosen: Vec<Option<Candidate>> = (0..=len).map(|_| None).collect();
    let mut trailing_pos: Vec<Option<PosTag>> = vec![None; len + 1];
    dp[0] = 0.0;

    for i in 1..=len {
        for candidate in candidates_ending_at(i, chars, &dict_matches_by_end, dictionary, scorer) {
            let j = candidate.start;
            if !dp[j].is_finite() {
                continue;
            }
            if !validator.is_valid(trailing_pos[j], candidate.entry_pos) {
                continue;
            }
            let total = dp[j] + candidate.cost + scorer.transition_cost(trailing_pos[j], candidate.entry_pos);
            if total < dp[i] {
                dp[i] = total;
                back[i] = Some(j);
                trailing_pos[i] = Some(candidate.trailing_pos);
                chosen[i] = Some(candidate);
            }
        }
    }

    // Guaranteed reachable: single-character OOV edges exist everywhere,
    // so dp[len] is always finite once dp[0] is.
    let mut morphemes = Vec::new();
    let mut i = len;
    while i > 0 {
        let Some(j) = back[i] else { break };
        let candidate = chosen[i].take().expect("back[i] implies chosen[i]");
        let surface: String = chars[j..i].iter().collect();
        morphemes.push(
            Morpheme::simple(&surface, candidate.pos, &candidate.lemma, j, i)
                .with_confidence(candidate.confidence)
                .with_sub_morphemes(candidate.sub_morphemes),
        );
        i = j;
    }
    morphemes.reverse();
    morphemes
}

/// Shift every morpheme (and its sub-morphemes) by a char offset, for
/// splicing a sub-span's decode result back into its parent text.
pub(crate) fn shift(morphemes: Vec<Morpheme>, offset: usize) -> Vec<Morpheme> {
    fn shift_one(mut m: Morpheme, offset: usize) -> Morpheme {
        m.start += offset;
        m.end += offset;
        m.sub_morphemes = m
            .sub_morphemes
            .into_iter()
            .map(|s| shift_one(s, offset))
            .collect();
        m
    }
    morphemes.into_iter().map(|m| shift_one(m, offset)).collect()
}

/// Decode a full text (a sentence, or any span without an embedded
/// sentence boundary) into morphemes, splitting it first into
/// same-class runs and routing each run to the decoder appropriate for
/// its character class.
pub fn decode(
    text: &str,
    dictionary: &Dictionary,
    scorer: &Scorer,
    validator: &ConstraintValidator,
) -> Vec<Morpheme> {
    let mut out = Vec::new();
    for token in preprocessor::tokenize(text) {
        match token.kind {
            TokenKind::Whitespace => {}
            TokenKind::Hangul => {
                let chars: Vec<char> = token.text.chars().collect();
                out.extend(shift(
                    decode_span(&chars, dictionary, scorer, validator),
                    token.start,
                ));
            }
            TokenKind::Punctuation => {
                for (offset, c) in token.text.chars().enumerate() {
                    let s = c.to_string();
                    out.push(Morpheme::simple(
                        &s,
                        PosTag::for_punctuation(c),
                        &s,
                        token.start + offset,
                        token.start + offset + 1,
                    ));
                }
            }
            TokenKind::Digit => out.push(Morpheme::simple(
                &token.text,
                PosTag::SN,
                &token.text,
                token.start,
                token.end,
            )),
            TokenKind::Latin => out.push(Morpheme::simple(
                &token.text,
                PosTag::SL,
                &token.text,
                token.start,
                token.end,
            )),
            TokenKind::Cjk => out.push(Morpheme::simple(
                &token.text,
                PosTag::SH,
                &token.text,
                token.start,
                token.end,
            )),
            TokenKind::Other => out.push(
                Morpheme::simple(&token.text, PosTag::NA, &token.text, token.start, token.end)
                    .with_confidence(Confidence::new(0.3)),
            ),
        }
    }
    out
}
