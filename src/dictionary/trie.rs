//! Trie storage: a logical (HashMap-edged) trie that always backs
//! queries, plus an optional double-array compilation of it used as a
//! faster traversal layer when compilation succeeds.
//!
//! Edges are labeled by Unicode scalar value, matching the data model's
//! "edges are labeled with Hangul syllables (or any Unicode code
//! point)". Raw code points run past U+10FFFF, far too sparse to index
//! a `base`/`check` array directly, so each trie keeps its own dense
//! per-instance alphabet: every distinct character actually inserted is
//! assigned a small integer code the double array indexes by.

use std::collections::{HashMap, VecDeque};

use crate::error::{AnalyzerError, Result};

type Pattern = (u32, u32);

#[derive(Debug, Clone, Default)]
struct Alphabet {
    code_of: HashMap<char, u32>,
    chars: Vec<char>,
}

impl Alphabet {
    fn intern(&mut self, c: char) -> u32 {
        if let Some(&code) = self.code_of.get(&c) {
            return code;
        }
        let code = self.chars.len() as u32;
        self.chars.push(c);
        self.code_of.insert(c, code);
        code
    }

    fn code_of(&self, c: char) -> Option<u32> {
        self.code_of.get(&c).copied()
    }
}

#[derive(Debug, Clone, Default)]
struct LogicalNode {
    children: HashMap<u32, usize>,
    /// Patterns inserted with this exact node as the terminal state.
    own_patterns: Vec<Pattern>,
    /// `own_patterns` unioned with every pattern reachable by following
    /// `fail` links, populated by `build`.
    patterns: Vec<Pattern>,
    fail: usize,
    depth: u32,
}

/// A trie over Unicode scalar values backed by a plain (HashMap-edged)
/// node list, with Aho-Corasick failure links computed by `build`.
///
/// This is both the always-correct reference implementation and the
/// "plain trie" fallback described in the design: it is exactly what
/// queries fall back to when double-array compilation does not fit in
/// its address-space budget.
#[derive(Debug, Clone)]
pub struct LogicalTrie {
    nodes: Vec<LogicalNode>,
    alphabet: Alphabet,
    finalized: bool,
}

const ROOT: usize = 0;

impl Default for LogicalTrie {
    fn default() -> Self {
        Self {
            nodes: vec![LogicalNode::default()],
            alphabet: Alphabet::default(),
            finalized: false,
        }
    }
}

impl LogicalTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn insert(&mut self, surface: &str, pattern: Pattern) -> Result<()> {
        if self.finalized {
            return Err(AnalyzerError::InvariantViolation(format!(
                "insert after finalized build: {surface:?}"
            )));
        }
        let mut cur = ROOT;
        for c in surface.chars() {
            let code = self.alphabet.intern(c);
            cur = match self.nodes[cur].children.get(&code) {
                Some(&next) => next,
                None => {
                    let depth = self.nodes[cur].depth + 1;
                    let new_id = self.nodes.len();
                    self.nodes.push(LogicalNode {
                        depth,
                        ..Default::default()
                    });
                    self.nodes[cur].children.insert(code, new_id);
                    new_id
                }
            };
        }
        if !self.nodes[cur].own_patterns.contains(&pattern) {
            self.nodes[cur].own_patterns.push(pattern);
        }
        Ok(())
    }

    fn walk(&self, surface: &str) -> Option<usize> {
        let mut cur = ROOT;
        for c in surface.chars() {
            let code = self.alphabet.code_of(c)?;
            cur = *self.nodes[cur].children.get(&code)?;
        }
        Some(cur)
    }

    pub fn exists(&self, surface: &str) -> bool {
        self.walk(surface)
            .is_some_and(|n| !self.nodes[n].own_patterns.is_empty())
    }

    pub fn search(&self, surface: &str) -> &[Pattern] {
        self.walk(surface)
            .map(|n| self.nodes[n].own_patterns.as_slice())
            .unwrap_or(&[])
    }

    fn find_transition(&self, state: usize, code: u32) -> Option<usize> {
        self.nodes[state].children.get(&code).copied()
    }

    /// Compute Aho-Corasick failure links by breadth-first walk from the
    /// root, augmenting every node's pattern set with the patterns
    /// reachable along its failure chain. Marks the trie finalized.
    pub fn build(&mut self) {
        let mut queue = VecDeque::new();
        let root_children: Vec<(u32, usize)> = self.nodes[ROOT]
            .children
            .iter()
            .map(|(&c, &n)| (c, n))
            .collect();
        for &(_, child) in &root_children {
            self.nodes[child].fail = ROOT;
            queue.push_back(child);
        }
        while let Some(cur) = queue.pop_front() {
            let cur_children: Vec<(u32, usize)> = self.nodes[cur]
                .children
                .iter()
                .map(|(&c, &n)| (c, n))
                .collect();
            for (label, child) in cur_children {
                let mut f = self.nodes[cur].fail;
                let target = loop {
                    if let Some(t) = self.find_transition(f, label) {
                        break t;
                    }
                    if f == ROOT {
                        break ROOT;
                    }
                    f = self.nodes[f].fail;
                };
                self.nodes[child].fail = target;
                let inherited = self.nodes[target].patterns.clone();
                self.nodes[child].patterns = self.nodes[child].own_patterns.clone();
                for p in inherited {
                    if !self.nodes[child].patterns.contains(&p) {
                        self.nodes[child].patterns.push(p);
                    }
                }
                queue.push_back(child);
            }
        }
        self.finalized = true;
    }

    /// All-substring search, per the all-positions contract: for every
    /// `(i, j)` with `text[i..j]` a key, one `(i, j - i, patterns)`
    /// entry, grouped by end position ascending then length ascending.
    pub fn search_all_patterns(&self, text: &str) -> Vec<(usize, usize, Vec<Pattern>)> {
        let mut results = Vec::new();
        let mut cur = ROOT;
        for (end_idx, c) in text.chars().enumerate() {
            let end_position = end_idx + 1;
            let code = match self.alphabet.code_of(c) {
                Some(code) => code,
                None => {
                    cur = ROOT;
                    continue;
                }
            };
            loop {
                if let Some(next) = self.find_transition(cur, code) {
                    cur = next;
                    break;
                }
                if cur == ROOT {
                    break;
                }
                cur = self.nodes[cur].fail;
            }

            let mut matches_here = Vec::new();
            let mut f = cur;
            loop {
                if !self.nodes[f].own_patterns.is_empty() {
                    matches_here.push((self.nodes[f].depth as usize, self.nodes[f].own_patterns.clone()));
                }
                if f == ROOT {
                    break;
                }
                f = self.nodes[f].fail;
            }
            matches_here.reverse();
            for (length, patterns) in matches_here {
                results.push((end_position - length, length, patterns));
            }
        }
        results
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Compile this logical trie into a double-array representation.
    /// Returns `None` (rather than erroring) if no free base offset can
    /// be found within the allotted number of probe attempts — the
    /// caller is expected to keep using the logical trie in that case.
    pub fn compile_double_array(&self, probe_budget: usize) -> Option<DoubleArrayTrie> {
        DoubleArrayTrie::compile(self, probe_budget)
    }
}

const FREE: i32 = -1;

/// A compiled double-array acceleration layer over an already-built
/// [`LogicalTrie`]. Read-only: all structural changes happen on the
/// logical trie and are recompiled from scratch.
#[derive(Debug, Clone)]
pub struct DoubleArrayTrie {
    base: Vec<i32>,
    check: Vec<i32>,
}

impl DoubleArrayTrie {
    fn ensure_capacity(&mut self, len: usize) {
        if self.base.len() < len {
            self.base.resize(len, 0);
            self.check.resize(len, FREE);
        }
    }

    fn fits(&self, base: i64, codes: &[u32]) -> bool {
        codes.iter().all(|&code| {
            let slot = base + code as i64;
            slot >= 0 && (slot as usize) < self.check.len() && self.check[slot as usize] == FREE
        })
    }

    fn find_free_base(&mut self, codes: &[u32], probe_budget: usize) -> Option<i64> {
        let max_code = codes.iter().copied().max().unwrap_or(0) as i64;
        for base in 1..=probe_budget as i64 {
            self.ensure_capacity((base + max_code + 1) as usize);
            if self.fits(base, codes) {
                return Some(base);
            }
        }
        None
    }

    fn compile(logical: &LogicalTrie, probe_budget: usize) -> Option<Self> {
        let mut da = DoubleArrayTrie {
            base: vec![0; logical.node_count().max(1)],
            check: vec![FREE; logical.node_count().max(1)],
        };
        da.check[ROOT] = ROOT as i32;

        let mut da_of_logical = vec![-1i32; logical.nodes.len()];
        da_of_logical[ROOT] = ROOT as i32;

        let mut queue = VecDeque::new();
        queue.push_back(ROOT);
        while let Some(logical_id) = queue.pop_front() {
            let da_id = da_of_logical[logical_id] as usize;
            let children: Vec<(u32, usize)> = logical.nodes[logical_id]
                .children
                .iter()
                .map(|(&c, &n)| (c, n))
                .collect();
            if children.is_empty() {
                continue;
            }
            let codes: Vec<u32> = children.iter().map(|&(c, _)| c).collect();
            let base = da.find_free_base(&codes, probe_budget)?;
            da.ensure_capacity((base as usize) + 1);
            da.base[da_id] = base as i32;
            for &(code, child_logical) in &children {
                let slot = (base + code as i64) as usize;
                da.ensure_capacity(slot + 1);
                da.check[slot] = da_id as i32;
                if da_of_logical.len() <= child_logical {
                    da_of_logical.resize(child_logical + 1, -1);
                }
                da_of_logical[child_logical] = slot as i32;
                queue.push_back(child_logical);
            }
        }
        Some(da)
    }

    /// Walk the double array for an exact-match lookup, returning the
    /// terminal state index if the whole string is a traced path.
    pub fn walk(&self, alphabet_codes: impl IntoIterator<Item = u32>) -> Option<usize> {
        let mut cur = ROOT;
        for code in alphabet_codes {
            let slot = self.base[cur] as i64 + code as i64;
            if slot < 0 || slot as usize >= self.check.len() {
                return None;
            }
            let slot = slot as usize;
            if self.check[slot] != cur as i32 {
                return None;
            }
            cur = slot;
        }
        Some(cur)
    }

    pub fn state_count(&self) -> usize {
        self.base.len()
    }
}
