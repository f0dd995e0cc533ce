//! The six classical Korean irregular conjugation patterns.
//!
//! Each pattern is expressed the same shape: recognize the surfaced
//! suffix, project a candidate stem, and restrict to a closed list of
//! roots known to take that pattern. The patterns are sibling values —
//! no shared trait, no inheritance — tried in a fixed order by
//! [`restore_any`].

use crate::hangul::{compose, decompose};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrregularKind {
    Bieup,
    Digeut,
    Siot,
    Hieut,
    Reu,
    Eu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularCandidate {
    pub stem: String,
    pub ending: String,
    pub kind: IrregularKind,
}

/// Roots that take the ㅂ-irregular pattern (곱다-type adjectives and a
/// handful of verbs), stored without the dictionary `다` suffix.
const BIEUP_ROOTS: &[&str] = &[
    "춥", "덥", "쉽", "어렵", "가볍", "무겁", "즐겁", "아름답", "괴롭", "반갑", "고맙", "귀엽",
    "더럽", "뜨겁", "외롭", "차갑", "놀랍", "부끄럽", "새롭", "시끄럽", "자유롭", "눕", "굽",
];

const DIGEUT_ROOTS: &[&str] = &["듣", "걷", "묻", "싣", "깨닫", "붇"];

const SIOT_ROOTS: &[&str] = &["짓", "붓", "긋", "잇", "낫"];

const HIEUT_ROOTS: &[&str] = &[
    "그렇", "이렇", "저렇", "어떻", "하얗", "까맣", "노랗", "빨갛", "파랗", "말갛", "동그랗", "커다랗",
];

const REU_ROOTS: &[&str] = &[
    "다르", "빠르", "모르", "부르", "고르", "오르", "자르", "누르", "흐르", "마르", "이르", "바르",
    "기르", "서두르", "가르",
];

const EU_ROOTS: &[&str] = &[
    "쓰", "끄", "크", "트", "담그", "고프", "아프", "바쁘", "기쁘", "슬프", "예쁘", "나쁘", "잠그",
    "치르", "들르",
];

fn root_matches(stem: &str, roots: &[&str]) -> bool {
    roots.iter().any(|&r| stem.ends_with(r))
}

fn restore_bieup(surface: &str) -> Option<IrregularCandidate> {
    let chars: Vec<char> = surface.chars().collect();
    if chars.len() < 2 {
        return None;
    }
    let last = decompose(*chars.last().unwrap());
    if last.initial != Some('ㅇ') {
        return None;
    }
    let ending = match (last.medial, last.final_) {
        (Some('ㅘ'), None) => "아",
        (Some('ㅝ'), None) => "어",
        (Some('ㅜ'), None) => "어",
        (Some('ㅜ'), Some('ㄴ')) => "은",
        _ => return None,
    };
    let prev = decompose(chars[chars.len() - 2]);
    if prev.final_.is_some() {
        return None;
    }
    let restored = compose(prev.initial?, prev.medial?, Some('ㅂ'))?;
    let mut stem: String = chars[..chars.len() - 2].iter().collect();
    stem.push(restored);
    if !root_matches(&stem, BIEUP_ROOTS) {
        return None;
    }
    Some(IrregularCandidate {
        stem,
        ending: ending.to_string(),
        kind: IrregularKind::Bieup,
    })
}

fn restore_digeut(surface: &str) -> Option<IrregularCandidate> {
    let chars: Vec<char> = surface.chars().collect();
    for split in 1..chars.len() {
        let stem_last = decompose(chars[split - 1]);
        if stem_last.final_ != Some('ㄹ') {
            continue;
        }
        let ending_first = decompose(chars[split]);
        if ending_first.initial != Some('ㅇ') {
            continue;
        }
        let (Some(stem_initial), Some(stem_medial)) = (stem_last.initial, stem_last.medial) else {
            continue;
        };
        let Some(restored) = compose(stem_initial, stem_medial, Some('ㄷ')) else {
            continue;
        };
        let mut stem: String = chars[..split - 1].iter().collect();
        stem.push(restored);
        if !root_matches(&stem, DIGEUT_ROOTS) {
            continue;
        }
        let ending: String = chars[split..].iter().collect();
        return Some(IrregularCandidate {
            stem,
            ending,
            kind: IrregularKind::Digeut,
        });
    }
    None
}

fn restore_siot(surface: &str) -> Option<IrregularCandidate> {
    let chars: Vec<char> = surface.chars().collect();
    for split in 1..chars.len() {
        let stem_last = decompose(chars[split - 1]);
        if stem_last.final_.is_some() {
            continue;
        }
        let ending_first = decompose(chars[split]);
        if ending_first.initial != Some('ㅇ') {
            continue;
        }
        let (Some(stem_initial), Some(stem_medial)) = (stem_last.initial, stem_last.medial) else {
            continue;
        };
        let Some(restored) = compose(stem_initial, stem_medial, Some('ㅅ')) else {
            continue;
        };
        let mut stem: String = chars[..split - 1].iter().collect();
        stem.push(restored);
        if !root_matches(&stem, SIOT_ROOTS) {
            continue;
        }
        let ending: String = chars[split..].iter().collect();
        return Some(IrregularCandidate {
            stem,
            ending,
            kind: IrregularKind::Siot,
        });
    }
    None
}

/// ㅏ/ㅑ/ㅓ/ㅕ fuse with a following ㅎ + 어 into ㅐ/ㅒ/ㅔ/ㅖ; restoring
/// reverses one of these four fusions.
fn unfuse_medial(m: char) -> Option<char> {
    match m {
        'ㅐ' => Some('ㅏ'),
        'ㅒ' => Some('ㅑ'),
        'ㅔ' => Some('ㅓ'),
        'ㅖ' => Some('ㅕ'),
        _ => None,
    }
}

fn restore_hieut(surface: &str) -> Option<IrregularCandidate> {
    let chars: Vec<char> = surface.chars().collect();
    if chars.is_empty() {
        return None;
    }
    let last = decompose(*chars.last().unwrap());
    if last.final_.is_some() {
        return None;
    }
    let base_medial = unfuse_medial(last.medial?)?;
    let restored = compose(last.initial?, base_medial, Some('ㅎ'))?;
    let mut stem: String = chars[..chars.len() - 1].iter().collect();
    stem.push(restored);
    if !root_matches(&stem, HIEUT_ROOTS) {
        return None;
    }
    Some(IrregularCandidate {
        stem,
        ending: "어".to_string(),
        kind: IrregularKind::Hieut,
    })
}

fn restore_reu(surface: &str) -> Option<IrregularCandidate> {
    let chars: Vec<char> = surface.chars().collect();
    if chars.len() < 2 {
        return None;
    }
    let last = decompose(*chars.last().unwrap());
    if last.initial != Some('ㄹ') {
        return None;
    }
    let ending = match last.medial {
        Some('ㅓ') => "어",
        Some('ㅏ') => "아",
        _ => return None,
    };
    let coda_syllable = decompose(chars[chars.len() - 2]);
    if coda_syllable.final_ != Some('ㄹ') {
        return None;
    }
    let base = compose(coda_syllable.initial?, coda_syllable.medial?, None)?;
    let mut stem: String = chars[..chars.len() - 2].iter().collect();
    stem.push(base);
    stem.push('르');
    if !root_matches(&stem, REU_ROOTS) {
        return None;
    }
    Some(IrregularCandidate {
        stem,
        ending: ending.to_string(),
        kind: IrregularKind::Reu,
    })
}

fn restore_eu(surface: &str) -> Option<IrregularCandidate> {
    let chars: Vec<char> = surface.chars().collect();
    if chars.is_empty() {
        return None;
    }
    let last = decompose(*chars.last().unwrap());
    if last.final_.is_some() {
        return None;
    }
    let ending = match last.medial {
        Some('ㅏ') => "아",
        Some('ㅓ') => "어",
        _ => return None,
    };
    let restored = compose(last.initial?, 'ㅡ', None)?;
    let mut stem: String = chars[..chars.len() - 1].iter().collect();
    stem.push(restored);
    if !root_matches(&stem, EU_ROOTS) {
        return None;
    }
    Some(IrregularCandidate {
        stem,
        ending: ending.to_string(),
        kind: IrregularKind::Eu,
    })
}

/// Try every pattern against `surface` in the table order, returning
/// every candidate whose reconstructed stem belongs to that pattern's
/// closed root list.
pub fn restore_any(surface: &str) -> Vec<IrregularCandidate> {
    [
        restore_bieup(surface),
        restore_digeut(surface),
        restore_siot(surface),
        restore_hieut(surface),
        restore_reu(surface),
        restore_eu(surface),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bieup_restores_cold_adjective() {
        let candidates = restore_any("추워");
        assert!(candidates
            .iter()
            .any(|c| c.kind == IrregularKind::Bieup && c.stem == "춥" && c.ending == "어"));
    }

    #[test]
    fn digeut_restores_listen_verb() {
        let candidates = restore_any("들어");
        assert!(candidates
            .iter()
            .any(|c| c.kind == IrregularKind::Digeut && c.stem == "듣" && c.ending == "어"));
    }

    #[test]
    fn siot_restores_build_verb() {
        let candidates = restore_any("지어");
        assert!(candidates
            .iter()
            .any(|c| c.kind == IrregularKind::Siot && c.stem == "짓" && c.ending == "어"));
    }

    #[test]
    fn hieut_restores_color_adjective() {
        let candidates = restore_any("하얘");
        assert!(candidates
            .iter()
            .any(|c| c.kind == IrregularKind::Hieut && c.stem == "하얗" && c.ending == "어"));
    }

    #[test]
    fn reu_restores_flow_verb() {
        let candidates = restore_any("흘러");
        assert!(candidates
            .iter()
            .any(|c| c.kind == IrregularKind::Reu && c.stem == "흐르" && c.ending == "어"));
    }

    #[test]
    fn eu_restores_write_verb() {
        let candidates = restore_any("써");
        assert!(candidates
            .iter()
            .any(|c| c.kind == IrregularKind::Eu && c.stem == "쓰" && c.ending == "어"));
    }

    #[test]
    fn non_irregular_surface_yields_nothing() {
        assert!(restore_any("친구").is_empty());
    }

    #[test]
    fn root_outside_closed_list_is_rejected() {
        // "와" alone decomposed as a bieup shape, but no real stem precedes it.
        assert!(restore_bieup("동와").is_none());
    }
}
