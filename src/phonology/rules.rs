//! The six ordered phonological rules: aspiration, palatalization,
//! liaison, neutralization, tensification, assimilation.

use super::Phoneme;

pub trait PhonologicalRule {
    fn apply(&self, phonemes: &mut [Phoneme]);
}

/// Aspiration of an obstruent coda against a neighboring ㅎ, in either
/// direction: the obstruent can precede or follow the ㅎ.
pub struct Aspiration;

impl PhonologicalRule for Aspiration {
    fn apply(&self, ph: &mut [Phoneme]) {
        for i in 0..ph.len().saturating_sub(1) {
            if !ph[i].is_hangul || !ph[i + 1].is_hangul {
                continue;
            }
            let p_final = ph[i].final_;
            let q_initial = ph[i + 1].initial;

            if q_initial == Some('ㅎ') {
                if let Some((aspirated, residue)) = aspiration_target(p_final) {
                    ph[i + 1].initial = Some(aspirated);
                    ph[i].final_ = residue;
                }
                continue;
            }

            if matches!(p_final, Some('ㅎ') | Some('ㄶ') | Some('ㅀ')) {
                if let Some(q) = q_initial {
                    if let Some(aspirated) = aspirate_obstruent(q) {
                        ph[i + 1].initial = Some(aspirated);
                        ph[i].final_ = match p_final {
                            Some('ㅎ') => None,
                            Some('ㄶ') => Some('ㄴ'),
                            Some('ㅀ') => Some('ㄹ'),
                            other => other,
                        };
                    }
                }
            }
        }
    }
}

/// Mirrors `AspirationRule._merge_h`'s group order: ㄱ/ㄲ/ㅋ group first,
/// then ㄷ/ㅅ/ㅆ/ㅈ/ㅊ/ㅌ (so plain ㅈ/ㅊ merge to ㅌ, not ㅊ), then ㅂ/ㅍ.
/// Only the literal cluster ㄵ falls through to a ㅊ target.
fn aspiration_target(final_: Option<char>) -> Option<(char, Option<char>)> {
    match final_? {
        'ㄱ' | 'ㄲ' | 'ㅋ' => Some(('ㅋ', None)),
        'ㄷ' | 'ㅅ' | 'ㅆ' | 'ㅈ' | 'ㅊ' | 'ㅌ' => Some(('ㅌ', None)),
        'ㅂ' | 'ㅍ' => Some(('ㅍ', None)),
        'ㄵ' => Some(('ㅊ', Some('ㄴ'))),
        'ㄺ' => Some(('ㅋ', Some('ㄹ'))),
        'ㄼ' => Some(('ㅍ', Some('ㄹ'))),
        _ => None,
    }
}

fn aspirate_obstruent(c: char) -> Option<char> {
    match c {
        'ㄱ' => Some('ㅋ'),
        'ㄷ' => Some('ㅌ'),
        'ㅂ' => Some('ㅍ'),
        'ㅈ' => Some('ㅊ'),
        'ㅅ' => Some('ㅆ'),
        _ => None,
    }
}

/// ㄷ/ㅌ/ㄾ codas palatalize before an ㅣ-class onset.
pub struct Palatalization;

impl PhonologicalRule for Palatalization {
    fn apply(&self, ph: &mut [Phoneme]) {
        for i in 0..ph.len().saturating_sub(1) {
            if !ph[i].is_hangul || !ph[i + 1].is_hangul {
                continue;
            }
            if ph[i + 1].initial != Some('ㅇ') {
                continue;
            }
            let Some(medial) = ph[i + 1].medial else {
                continue;
            };
            if !matches!(medial, 'ㅣ' | 'ㅑ' | 'ㅕ' | 'ㅛ' | 'ㅠ' | 'ㅖ' | 'ㅒ') {
                continue;
            }
            match ph[i].final_ {
                Some('ㄷ') => {
                    ph[i + 1].initial = Some('ㅈ');
                    ph[i].final_ = None;
                }
                Some('ㅌ') => {
                    ph[i + 1].initial = Some('ㅊ');
                    ph[i].final_ = None;
                }
                Some('ㄾ') => {
                    ph[i + 1].initial = Some('ㅊ');
                    ph[i].final_ = Some('ㄹ');
                }
                _ => {}
            }
        }
    }
}

/// Moves a coda onto a following vowel-initial (ㅇ) syllable.
pub struct Liaison;

impl PhonologicalRule for Liaison {
    fn apply(&self, ph: &mut [Phoneme]) {
        for i in 0..ph.len().saturating_sub(1) {
            if !ph[i].is_hangul || !ph[i + 1].is_hangul {
                continue;
            }
            if ph[i + 1].initial != Some('ㅇ') {
                continue;
            }
            let Some(final_) = ph[i].final_ else {
                continue;
            };
            match final_ {
                'ㅎ' | 'ㄶ' | 'ㅀ' => {
                    let residue = match final_ {
                        'ㄶ' => Some('ㄴ'),
                        'ㅀ' => Some('ㄹ'),
                        _ => None,
                    };
                    if let Some(c) = residue {
                        ph[i + 1].initial = Some(c);
                    }
                    ph[i].final_ = None;
                }
                c if is_splittable_cluster(c) => {
                    let (residue, onset) = split_cluster(c);
                    let onset = if onset == 'ㅅ' { 'ㅆ' } else { onset };
                    ph[i].final_ = residue;
                    ph[i + 1].initial = Some(onset);
                }
                c => {
                    ph[i + 1].initial = Some(c);
                    ph[i].final_ = None;
                }
            }
        }
    }
}

fn is_splittable_cluster(c: char) -> bool {
    matches!(
        c,
        'ㄳ' | 'ㄵ' | 'ㄺ' | 'ㄻ' | 'ㄼ' | 'ㄽ' | 'ㄾ' | 'ㄿ' | 'ㅄ'
    )
}

/// Splits a coda cluster into (residue kept as coda, onset migrated to
/// the next syllable). The left member of the orthographic cluster
/// stays behind; the right member moves.
fn split_cluster(c: char) -> (Option<char>, char) {
    match c {
        'ㄳ' => (Some('ㄱ'), 'ㅅ'),
        'ㄵ' => (Some('ㄴ'), 'ㅈ'),
        'ㄺ' => (Some('ㄹ'), 'ㄱ'),
        'ㄻ' => (Some('ㄹ'), 'ㅁ'),
        'ㄼ' => (Some('ㄹ'), 'ㅂ'),
        'ㄽ' => (Some('ㄹ'), 'ㅅ'),
        'ㄾ' => (Some('ㄹ'), 'ㅌ'),
        'ㄿ' => (Some('ㄹ'), 'ㅍ'),
        'ㅄ' => (Some('ㅂ'), 'ㅅ'),
        other => (None, other),
    }
}

/// Collapses a coda to one of the seven permitted codas when it is not
/// carried forward by liaison: followed by a consonant onset or by
/// end-of-string.
pub struct Neutralization;

impl PhonologicalRule for Neutralization {
    fn apply(&self, ph: &mut [Phoneme]) {
        let len = ph.len();
        for i in 0..len {
            if !ph[i].is_hangul {
                continue;
            }
            let Some(final_) = ph[i].final_ else {
                continue;
            };
            let followed_by_vowel_onset =
                i + 1 < len && ph[i + 1].is_hangul && ph[i + 1].initial == Some('ㅇ');
            if followed_by_vowel_onset {
                continue;
            }
            let followed_by_giyeok =
                i + 1 < len && ph[i + 1].is_hangul && ph[i + 1].initial == Some('ㄱ');
            ph[i].final_ = Some(neutralize_final(final_, followed_by_giyeok));
        }
    }
}

fn neutralize_final(final_: char, followed_by_giyeok: bool) -> char {
    match final_ {
        'ㄺ' => {
            if followed_by_giyeok {
                'ㄹ'
            } else {
                'ㄱ'
            }
        }
        'ㄲ' | 'ㄳ' | 'ㅋ' => 'ㄱ',
        'ㅅ' | 'ㅆ' | 'ㅈ' | 'ㅊ' | 'ㅌ' | 'ㅎ' => 'ㄷ',
        'ㄼ' | 'ㄽ' | 'ㄾ' | 'ㅀ' => 'ㄹ',
        'ㄵ' | 'ㄶ' => 'ㄴ',
        'ㄻ' => 'ㅁ',
        'ㄿ' | 'ㅄ' => 'ㅂ',
        other => other,
    }
}

/// Tenses a following ㄱ/ㄷ/ㅂ/ㅅ/ㅈ onset after specific codas,
/// including the verb-stem heuristic over the original (pre-
/// neutralization) cluster.
pub struct Tensification;

impl PhonologicalRule for Tensification {
    fn apply(&self, ph: &mut [Phoneme]) {
        for i in 0..ph.len().saturating_sub(1) {
            if !ph[i].is_hangul || !ph[i + 1].is_hangul {
                continue;
            }
            let Some(q_initial) = ph[i + 1].initial else {
                continue;
            };
            if !matches!(q_initial, 'ㄱ' | 'ㄷ' | 'ㅂ' | 'ㅅ' | 'ㅈ') {
                continue;
            }
            let triggers = matches!(ph[i].final_, Some('ㄱ') | Some('ㄷ') | Some('ㅂ'))
                || matches!(
                    ph[i].original_final,
                    Some('ㄵ') | Some('ㄶ') | Some('ㄻ') | Some('ㄼ') | Some('ㄾ') | Some('ㅀ')
                )
                || (ph[i].final_ == Some('ㄹ')
                    && matches!(
                        ph[i].original_final,
                        Some('ㄺ') | Some('ㄼ') | Some('ㄾ') | Some('ㅀ')
                    ));
            if triggers {
                ph[i + 1].initial = Some(tense(q_initial));
            }
        }
    }
}

fn tense(c: char) -> char {
    match c {
        'ㄱ' => 'ㄲ',
        'ㄷ' => 'ㄸ',
        'ㅂ' => 'ㅃ',
        'ㅅ' => 'ㅆ',
        'ㅈ' => 'ㅉ',
        other => other,
    }
}

/// Nasal/liquid assimilation, applied left-to-right for up to three
/// passes, stopping early once a pass makes no change.
pub struct Assimilation;

impl PhonologicalRule for Assimilation {
    fn apply(&self, ph: &mut [Phoneme]) {
        for _ in 0..3 {
            let mut changed = false;
            for i in 0..ph.len().saturating_sub(1) {
                if !ph[i].is_hangul || !ph[i + 1].is_hangul {
                    continue;
                }

                match (ph[i].final_, ph[i + 1].initial) {
                    (Some('ㄴ'), Some('ㄹ')) => {
                        ph[i].final_ = Some('ㄹ');
                        ph[i + 1].initial = Some('ㄹ');
                        changed = true;
                    }
                    (Some('ㄹ'), Some('ㄴ')) => {
                        ph[i + 1].initial = Some('ㄹ');
                        changed = true;
                    }
                    _ => {}
                }

                if matches!(ph[i].final_, Some('ㄱ') | Some('ㄷ') | Some('ㅂ') | Some('ㅁ') | Some('ㅇ'))
                    && ph[i + 1].initial == Some('ㄹ')
                {
                    ph[i + 1].initial = Some('ㄴ');
                    changed = true;
                }

                if matches!(ph[i + 1].initial, Some('ㄴ') | Some('ㅁ')) {
                    let new_final = match ph[i].final_ {
                        Some('ㄱ') => Some('ㅇ'),
                        Some('ㄷ') => Some('ㄴ'),
                        Some('ㅂ') => Some('ㅁ'),
                        other => other,
                    };
                    if new_final != ph[i].final_ {
                        ph[i].final_ = new_final;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
    }
}

/// The standard six-stage pipeline, in order.
pub fn default_pipeline() -> Vec<Box<dyn PhonologicalRule>> {
    vec![
        Box::new(Aspiration),
        Box::new(Palatalization),
        Box::new(Liaison),
        Box::new(Neutralization),
        Box::new(Tensification),
        Box::new(Assimilation),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::apply_pipeline;

    #[test]
    fn neutralization_reduces_cluster_to_permitted_coda() {
        assert_eq!(neutralize_final('ㄳ', false), 'ㄱ');
        assert_eq!(neutralize_final('ㄵ', false), 'ㄴ');
        assert_eq!(neutralize_final('ㄿ', false), 'ㅂ');
    }

    #[test]
    fn rieul_giyeok_cluster_exception_before_giyeok_onset() {
        assert_eq!(neutralize_final('ㄺ', true), 'ㄹ');
        assert_eq!(neutralize_final('ㄺ', false), 'ㄱ');
    }

    #[test]
    fn liquidization_both_directions() {
        assert_eq!(apply_pipeline("신라", &default_pipeline()), "실라");
        assert_eq!(apply_pipeline("칼날", &default_pipeline()), "칼랄");
    }

    #[test]
    fn pipeline_is_order_sensitive_for_cluster_tensification() {
        let pipeline = default_pipeline();
        assert_eq!(apply_pipeline("읽고", &pipeline), "일꼬");
        assert_eq!(apply_pipeline("읽다", &pipeline), "익따");
    }
}
