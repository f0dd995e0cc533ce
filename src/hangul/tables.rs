//! Index ↔ Jamo tables for the modern Hangul syllable block.
//!
//! Index order follows the standard KS X 1001 jamo ordering, the same
//! ordering the choseong/jungseong/jongseong arithmetic in a precomposed
//! syllable's code point is defined over.

/// The 19 onset (choseong) consonants, indexed 0..19.
pub const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// The 21 nucleus (jungseong) vowels, indexed 0..21.
pub const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// The 28 coda (jongseong) slots, indexed 0..28. Index 0 is the empty
/// coda (open syllable); 1..28 are the 27 possible final consonants,
/// including the 11 consonant clusters.
pub const FINALS: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// First precomposed Hangul syllable, `가`.
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed Hangul syllable, `힣`.
pub const SYLLABLE_END: u32 = 0xD7A3;

pub fn initial_index(c: char) -> Option<usize> {
    INITIALS.iter().position(|&x| x == c)
}

pub fn medial_index(c: char) -> Option<usize> {
    MEDIALS.iter().position(|&x| x == c)
}

/// Index of a final consonant, where `None` maps to the empty slot 0.
pub fn final_index(c: Option<char>) -> Option<usize> {
    match c {
        None => Some(0),
        Some(c) => FINALS.iter().position(|&x| x == Some(c)),
    }
}
