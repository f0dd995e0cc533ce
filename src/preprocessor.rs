//! Sentence splitting and character-class tokenization ahead of the
//! lattice decoder, plus a closed list of compound patterns the
//! decoder gives priority as whole matches.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compound words and bound-morpheme sequences that should be
/// recognized as a single span whenever they occur, so the decoder
/// doesn't fragment them into implausible shorter morphemes.
pub const COMPOUND_PATTERNS: &[&str] = &[
    "대학교",
    "고등학교",
    "중학교",
    "초등학교",
    "유치원",
    "시립",
    "국립",
    "도립",
    "하다",
    "되다",
    "시키다",
    "거리",
];

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?。！？]+\s*").unwrap());

/// Split `text` into sentences on `.`, `!`, `?` and their full-width
/// counterparts, each followed by optional whitespace. The boundary
/// punctuation stays attached to the sentence it closes.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BOUNDARY.find_iter(text) {
        let end = m.end();
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = end;
    }
    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Hangul,
    Latin,
    Digit,
    Cjk,
    Punctuation,
    Whitespace,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Character offset of the token's start within the input it was
    /// tokenized from.
    pub start: usize,
    pub end: usize,
}

fn classify(c: char) -> TokenKind {
    if crate::hangul::is_hangul(c) {
        TokenKind::Hangul
    } else if c.is_ascii_alphabetic() {
        TokenKind::Latin
    } else if c.is_ascii_digit() {
        TokenKind::Digit
    } else if c.is_whitespace() {
        TokenKind::Whitespace
    } else if ('\u{4E00}'..='\u{9FFF}').contains(&c) {
        TokenKind::Cjk
    } else if c.is_ascii_punctuation() || matches!(c, '。' | '、' | '!' | '?' | '…') {
        TokenKind::Punctuation
    } else {
        TokenKind::Other
    }
}

/// Group consecutive characters of the same class into tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<(TokenKind, String, usize)> = None;

    for (i, c) in text.chars().enumerate() {
        let kind = classify(c);
        match &mut current {
            Some((cur_kind, buf, _)) if *cur_kind == kind => {
                buf.push(c);
            }
            _ => {
                if let Some((kind, text, start)) = current.take() {
                    let end = start + text.chars().count();
                    tokens.push(Token { text, kind, start, end });
                }
                current = Some((kind, c.to_string(), i));
            }
        }
    }
    if let Some((kind, text, start)) = current {
        let end = start + text.chars().count();
        tokens.push(Token { text, kind, start, end });
    }
    tokens
}

/// If one of the closed compound patterns starts at `chars[pos..]`,
/// return its length in characters.
pub fn compound_match_len(chars: &[char], pos: usize) -> Option<usize> {
    COMPOUND_PATTERNS.iter().find_map(|pattern| {
        let pat_chars: Vec<char> = pattern.chars().collect();
        if pos + pat_chars.len() <= chars.len() && chars[pos..pos + pat_chars.len()] == pat_chars[..]
        {
            Some(pat_chars.len())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_period_and_keeps_it_attached() {
        let sentences = split_sentences("친구가 학교에 갔습니다. 오늘은 좋은 날이다.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with('.'));
    }

    #[test]
    fn single_sentence_without_terminal_punctuation() {
        let sentences = split_sentences("안녕하세요");
        assert_eq!(sentences, vec!["안녕하세요".to_string()]);
    }

    #[test]
    fn tokenize_groups_by_character_class() {
        let tokens = tokenize("친구 abc123!");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Hangul,
                TokenKind::Whitespace,
                TokenKind::Latin,
                TokenKind::Digit,
                TokenKind::Punctuation,
            ]
        );
    }

    #[test]
    fn compound_pattern_is_recognized_at_position() {
        let chars: Vec<char> = "서울대학교".chars().collect();
        assert_eq!(compound_match_len(&chars, 2), Some(3));
    }

    #[test]
    fn no_compound_match_returns_none() {
        let chars: Vec<char> = "친구".chars().collect();
        assert_eq!(compound_match_len(&chars, 0), None);
    }

    #[test]
    fn empty_input_has_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
