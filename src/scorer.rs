//! Lattice edge costs: length priors, POS transition priors, and the
//! fixed OOV/conjugation adjustments.

use std::collections::HashMap;

use log::warn;

use crate::tagset::PosTag;

/// Tunable cost constants. Defaults match the magnitudes named in the
/// design so dictionary matches dominate OOV segments, and longer
/// matches beat shorter ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorerConfig {
    pub length_prior_one: f32,
    pub length_prior_two: f32,
    pub length_prior_three_plus: f32,
    pub oov_penalty: f32,
    pub conjugation_base: f32,
    pub short_predicate_or_interjection_penalty: f32,
    pub multi_syllable_noun_bonus: f32,
    pub multi_syllable_adverb_bonus: f32,
    pub heuristic_bonus: f32,
    pub heuristic_penalty: f32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            length_prior_one: -5.0,
            length_prior_two: -30.0,
            length_prior_three_plus: -40.0,
            oov_penalty: 50.0,
            conjugation_base: -25.0,
            short_predicate_or_interjection_penalty: 20.0,
            multi_syllable_noun_bonus: -5.0,
            multi_syllable_adverb_bonus: -10.0,
            heuristic_bonus: -10.0,
            heuristic_penalty: 10.0,
        }
    }
}

/// A learned (prev-POS, curr-POS) -> cost table, with a heuristic
/// backoff for any pair the table doesn't cover.
#[derive(Debug, Clone, Default)]
pub struct TransitionModel {
    table: HashMap<(PosTag, PosTag), f32>,
    backoff_bonus: f32,
    backoff_penalty: f32,
}

/// Adjacencies the heuristic backoff rewards when no learned cost is
/// available.
const CANONICAL_ADJACENCIES: &[(fn(PosTag) -> bool, fn(PosTag) -> bool)] = &[
    (PosTag::is_nominal, PosTag::is_particle),
    (PosTag::is_predicate, PosTag::is_ending),
    (is_ending_tag, PosTag::is_ending),
    (is_general_adverb, PosTag::is_nominal),
    (is_general_adverb, PosTag::is_predicate),
    (|p| p == PosTag::MM, PosTag::is_nominal),
];

fn is_ending_tag(t: PosTag) -> bool {
    t.is_ending()
}

fn is_general_adverb(t: PosTag) -> bool {
    t == PosTag::MAG
}

impl TransitionModel {
    pub fn from_table(table: HashMap<(PosTag, PosTag), f32>) -> Self {
        Self {
            table,
            backoff_bonus: -10.0,
            backoff_penalty: 10.0,
        }
    }

    /// Deserialize a JSON object of `"PREV,CURR": cost` entries. On a
    /// parse failure, logs and returns an empty table (pure heuristic
    /// backoff), matching the "parse or log+empty" degradation used
    /// elsewhere in the dictionary loading path.
    pub fn load(json: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct Raw(HashMap<String, f32>);

        match serde_json::from_str::<Raw>(json) {
            Ok(Raw(entries)) => {
                let mut table = HashMap::new();
                for (key, cost) in entries {
                    let Some((prev, curr)) = key.split_once(',') else {
                        warn!("transition model entry {key:?} is not \"PREV,CURR\", skipping");
                        continue;
                    };
                    let (Some(prev), Some(curr)) = (PosTag::from_str(prev), PosTag::from_str(curr))
                    else {
                        warn!("transition model entry {key:?} has an unknown tag, skipping");
                        continue;
                    };
                    table.insert((prev, curr), cost);
                }
                Self::from_table(table)
            }
            Err(e) => {
                warn!("failed to parse transition model json: {e}; using heuristic backoff only");
                Self::default()
            }
        }
    }

    pub fn cost(&self, prev: Option<PosTag>, curr: PosTag) -> f32 {
        let Some(prev) = prev else {
            return 0.0;
        };
        if let Some(&cost) = self.table.get(&(prev, curr)) {
            return cost;
        }
        if CANONICAL_ADJACENCIES
            .iter()
            .any(|&(is_prev, is_curr)| is_prev(prev) && is_curr(curr))
        {
            self.backoff_bonus
        } else {
            self.backoff_penalty
        }
    }
}

/// A value bundling the length priors, OOV/conjugation constants, and
/// the transition model, passed explicitly into the decoder rather
/// than held as ambient global state.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScorerConfig,
    transitions: TransitionModel,
}

impl Scorer {
    pub fn new(transitions: TransitionModel) -> Self {
        Self {
            config: ScorerConfig::default(),
            transitions,
        }
    }

    pub fn with_config(config: ScorerConfig, transitions: TransitionModel) -> Self {
        Self { config, transitions }
    }

    pub fn length_prior(&self, syllable_count: usize) -> f32 {
        match syllable_count {
            0 => 0.0,
            1 => self.config.length_prior_one,
            2 => self.config.length_prior_two,
            _ => self.config.length_prior_three_plus,
        }
    }

    pub fn transition_cost(&self, prev: Option<PosTag>, curr: PosTag) -> f32 {
        self.transitions.cost(prev, curr)
    }

    pub fn oov_penalty(&self) -> f32 {
        self.config.oov_penalty
    }

    pub fn conjugation_base(&self) -> f32 {
        self.config.conjugation_base
    }

    /// Local bonuses applied to dictionary candidates, per §4.7: a
    /// single-syllable predicate or interjection is penalized, a
    /// multi-syllable common noun or general adverb is rewarded.
    pub fn local_bonus(&self, pos: PosTag, syllable_count: usize) -> f32 {
        let mut bonus = 0.0;
        if syllable_count == 1 && (pos.is_predicate() || pos == PosTag::IC) {
            bonus += self.config.short_predicate_or_interjection_penalty;
        }
        if syllable_count > 1 && pos == PosTag::NNG {
            bonus += self.config.multi_syllable_noun_bonus;
        }
        if syllable_count > 1 && pos == PosTag::MAG {
            bonus += self.config.multi_syllable_adverb_bonus;
        }
        bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_priors_favor_longer_matches() {
        let scorer = Scorer::new(TransitionModel::default());
        assert!(scorer.length_prior(3) < scorer.length_prior(2));
        assert!(scorer.length_prior(2) < scorer.length_prior(1));
        assert!(scorer.length_prior(1) < scorer.length_prior(0));
    }

    #[test]
    fn heuristic_backoff_rewards_noun_particle() {
        let model = TransitionModel::default();
        assert!(model.cost(Some(PosTag::NNG), PosTag::JKS) < 0.0);
    }

    #[test]
    fn heuristic_backoff_penalizes_unrelated_adjacency() {
        let model = TransitionModel::default();
        assert!(model.cost(Some(PosTag::JKS), PosTag::JKS) > 0.0);
    }

    #[test]
    fn start_of_span_has_no_transition_cost() {
        let model = TransitionModel::default();
        assert_eq!(model.cost(None, PosTag::NNG), 0.0);
    }

    #[test]
    fn learned_table_overrides_heuristic() {
        let mut table = HashMap::new();
        table.insert((PosTag::JKS, PosTag::JKS), -99.0);
        let model = TransitionModel::from_table(table);
        assert_eq!(model.cost(Some(PosTag::JKS), PosTag::JKS), -99.0);
    }

    #[test]
    fn load_falls_back_to_heuristic_on_bad_json() {
        let model = TransitionModel::load("not json");
        assert!(model.cost(Some(PosTag::NNG), PosTag::JKS) < 0.0);
    }

    #[test]
    fn local_bonus_penalizes_short_predicate() {
        let scorer = Scorer::new(TransitionModel::default());
        assert!(scorer.local_bonus(PosTag::VV, 1) > 0.0);
        assert!(scorer.local_bonus(PosTag::NNG, 2) < 0.0);
    }
}
