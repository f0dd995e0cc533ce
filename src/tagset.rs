//! The closed part-of-speech tag enumeration.
//!
//! Tags follow the Sejong/KLCP labeling scheme used across Korean NLP
//! tooling: a short uppercase mnemonic whose first letter (or two)
//! names the group the tag belongs to. Group membership is derived from
//! the tag's string prefix rather than stored redundantly, per the
//! closed-enumeration note in the data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single part-of-speech tag, or the unanalyzed fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum PosTag {
    // Nominals
    NNG,
    NNP,
    NNB,
    NR,
    NP,
    // Predicates
    VV,
    VA,
    VX,
    VCP,
    VCN,
    // Modifiers
    MM,
    MAG,
    MAJ,
    // Particles
    JKS,
    JKC,
    JKG,
    JKO,
    JKB,
    JKV,
    JKQ,
    JX,
    JC,
    // Endings
    EP,
    EF,
    EC,
    ETN,
    ETM,
    // Affixes
    XPN,
    XSN,
    XSV,
    XSA,
    XR,
    // Symbols
    SF,
    SP,
    SS,
    SE,
    SO,
    SW,
    SL,
    SH,
    SN,
    // Interjection
    IC,
    // Unanalyzed
    NA,
}

/// The coarse group a tag belongs to, keyed on its prefix letter(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosGroup {
    Nominal,
    Predicate,
    Modifier,
    Particle,
    Ending,
    Affix,
    Symbol,
    Interjection,
    Unanalyzed,
}

impl PosTag {
    /// Stable string name, as used in serialized archives and composite
    /// (`+`-joined) tags.
    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::NNG => "NNG",
            PosTag::NNP => "NNP",
            PosTag::NNB => "NNB",
            PosTag::NR => "NR",
            PosTag::NP => "NP",
            PosTag::VV => "VV",
            PosTag::VA => "VA",
            PosTag::VX => "VX",
            PosTag::VCP => "VCP",
            PosTag::VCN => "VCN",
            PosTag::MM => "MM",
            PosTag::MAG => "MAG",
            PosTag::MAJ => "MAJ",
            PosTag::JKS => "JKS",
            PosTag::JKC => "JKC",
            PosTag::JKG => "JKG",
            PosTag::JKO => "JKO",
            PosTag::JKB => "JKB",
            PosTag::JKV => "JKV",
            PosTag::JKQ => "JKQ",
            PosTag::JX => "JX",
            PosTag::JC => "JC",
            PosTag::EP => "EP",
            PosTag::EF => "EF",
            PosTag::EC => "EC",
            PosTag::ETN => "ETN",
            PosTag::ETM => "ETM",
            PosTag::XPN => "XPN",
            PosTag::XSN => "XSN",
            PosTag::XSV => "XSV",
            PosTag::XSA => "XSA",
            PosTag::XR => "XR",
            PosTag::SF => "SF",
            PosTag::SP => "SP",
            PosTag::SS => "SS",
            PosTag::SE => "SE",
            PosTag::SO => "SO",
            PosTag::SW => "SW",
            PosTag::SL => "SL",
            PosTag::SH => "SH",
            PosTag::SN => "SN",
            PosTag::IC => "IC",
            PosTag::NA => "NA",
        }
    }

    /// Parse a tag from its stable string name.
    pub fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "NNG" => PosTag::NNG,
            "NNP" => PosTag::NNP,
            "NNB" => PosTag::NNB,
            "NR" => PosTag::NR,
            "NP" => PosTag::NP,
            "VV" => PosTag::VV,
            "VA" => PosTag::VA,
            "VX" => PosTag::VX,
            "VCP" => PosTag::VCP,
            "VCN" => PosTag::VCN,
            "MM" => PosTag::MM,
            "MAG" => PosTag::MAG,
            "MAJ" => PosTag::MAJ,
            "JKS" => PosTag::JKS,
            "JKC" => PosTag::JKC,
            "JKG" => PosTag::JKG,
            "JKO" => PosTag::JKO,
            "JKB" => PosTag::JKB,
            "JKV" => PosTag::JKV,
            "JKQ" => PosTag::JKQ,
            "JX" => PosTag::JX,
            "JC" => PosTag::JC,
            "EP" => PosTag::EP,
            "EF" => PosTag::EF,
            "EC" => PosTag::EC,
            "ETN" => PosTag::ETN,
            "ETM" => PosTag::ETM,
            "XPN" => PosTag::XPN,
            "XSN" => PosTag::XSN,
            "XSV" => PosTag::XSV,
            "XSA" => PosTag::XSA,
            "XR" => PosTag::XR,
            "SF" => PosTag::SF,
            "SP" => PosTag::SP,
            "SS" => PosTag::SS,
            "SE" => PosTag::SE,
            "SO" => PosTag::SO,
            "SW" => PosTag::SW,
            "SL" => PosTag::SL,
            "SH" => PosTag::SH,
            "SN" => PosTag::SN,
            "IC" => PosTag::IC,
            "NA" => PosTag::NA,
            _ => return None,
        })
    }

    /// The coarse group this tag's prefix places it in.
    pub fn group(self) -> PosGroup {
        match self {
            PosTag::NNG | PosTag::NNP | PosTag::NNB | PosTag::NR | PosTag::NP => {
                PosGroup::Nominal
            }
            PosTag::VV | PosTag::VA | PosTag::VX | PosTag::VCP | PosTag::VCN => {
                PosGroup::Predicate
            }
            PosTag::MM | PosTag::MAG | PosTag::MAJ => PosGroup::Modifier,
            PosTag::JKS
            | PosTag::JKC
            | PosTag::JKG
            | PosTag::JKO
            | PosTag::JKB
            | PosTag::JKV
            | PosTag::JKQ
            | PosTag::JX
            | PosTag::JC => PosGroup::Particle,
            PosTag::EP | PosTag::EF | PosTag::EC | PosTag::ETN | PosTag::ETM => PosGroup::Ending,
            PosTag::XPN | PosTag::XSN | PosTag::XSV | PosTag::XSA | PosTag::XR => PosGroup::Affix,
            PosTag::SF
            | PosTag::SP
            | PosTag::SS
            | PosTag::SE
            | PosTag::SO
            | PosTag::SW
            | PosTag::SL
            | PosTag::SH
            | PosTag::SN => PosGroup::Symbol,
            PosTag::IC => PosGroup::Interjection,
            PosTag::NA => PosGroup::Unanalyzed,
        }
    }

    pub fn is_nominal(self) -> bool {
        self.group() == PosGroup::Nominal
    }

    pub fn is_predicate(self) -> bool {
        self.group() == PosGroup::Predicate
    }

    pub fn is_modifier(self) -> bool {
        self.group() == PosGroup::Modifier
    }

    pub fn is_particle(self) -> bool {
        self.group() == PosGroup::Particle
    }

    pub fn is_ending(self) -> bool {
        self.group() == PosGroup::Ending
    }

    pub fn is_affix(self) -> bool {
        self.group() == PosGroup::Affix
    }

    pub fn is_symbol(self) -> bool {
        self.group() == PosGroup::Symbol
    }

    /// Pick the symbol tag for a single punctuation character, per the
    /// rule that a fully-punctuation span becomes one SF/SP/SS/SE/SO/SW
    /// morpheme.
    pub fn for_punctuation(c: char) -> PosTag {
        match c {
            '.' | '?' | '!' => PosTag::SF,
            ',' | '·' | ':' | '/' => PosTag::SP,
            '\'' | '"' | '(' | ')' | '[' | ']' | '{' | '}' => PosTag::SS,
            '…' => PosTag::SE,
            '-' | '~' => PosTag::SO,
            _ => PosTag::SW,
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join a sequence of tags into a composite `+`-separated tag string, as
/// used for composite dictionary entries and conjugation decompositions.
pub fn join_composite<'a>(tags: impl IntoIterator<Item = &'a PosTag>) -> String {
    tags.into_iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join("+")
}
