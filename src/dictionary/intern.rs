//! String interning tables for POS tags and lemmas.
//!
//! Each trie node's pattern set is a short list of (POS id, lemma id)
//! pairs rather than owned strings, so the per-state payload stays a
//! handful of machine words. The same tables are what an archive's
//! "POS and lemma intern tables" files serialize.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bidirectional string ↔ small-integer-id table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InternTable {
    strings: Vec<String>,
    ids: HashMap<String, u32>,
}

impl InternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `s`, assigning a new one if this is the first
    /// time it has been seen.
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.ids.get(s) {
            return id;
        }
        let id = self.strings.len() as u32;
        self.strings.push(s.to_string());
        self.ids.insert(s.to_string(), id);
        id
    }

    /// Look up an id without inserting.
    pub fn id_of(&self, s: &str) -> Option<u32> {
        self.ids.get(s).copied()
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.strings.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut table = InternTable::new();
        let a = table.intern("NNG");
        let b = table.intern("VV");
        let c = table.intern("NNG");
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(table.get(a), Some("NNG"));
        assert_eq!(table.get(b), Some("VV"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn id_of_without_insert() {
        let mut table = InternTable::new();
        assert_eq!(table.id_of("NNG"), None);
        table.intern("NNG");
        assert_eq!(table.id_of("NNG"), Some(0));
    }
}
