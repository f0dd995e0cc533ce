//! The dictionary engine: trie storage plus the POS/lemma side tables
//! that keep each node's payload to a pair of integers.

mod archive;
mod intern;
mod trie;

pub use archive::{read_archive, write_archive, ArchiveFile};
pub use intern::InternTable;
pub use trie::{DoubleArrayTrie, LogicalTrie};

use std::path::PathBuf;

use log::warn;

use crate::error::Result;
use crate::tagset::PosTag;

/// How a [`Dictionary`] is populated before use.
pub enum DictionarySource {
    /// The small embedded seed lexicon, enough to cover closed-class
    /// particles/endings and a handful of common content words.
    Defaults,
    /// A serialized archive produced by [`write_archive`].
    Archive(PathBuf),
    /// Caller-supplied `(surface, POS, lemma)` triples, for tests and
    /// embedders that maintain their own lexicon.
    Entries(Vec<(String, PosTag, String)>),
}

/// The default probe budget for double-array compilation. Generous
/// enough that realistic seed-sized dictionaries always fit; a much
/// smaller budget is used in tests that want to exercise the
/// plain-trie fallback deliberately.
const DEFAULT_PROBE_BUDGET: usize = 1 << 20;

/// A built, immutable dictionary: the trie plus its POS/lemma intern
/// tables. Queries are served by the double-array compilation when one
/// was successfully built, and by the logical trie otherwise.
///
/// Holds no interior mutability once finalized, so it is `Send + Sync`
/// automatically and callers may share a finalized dictionary behind an
/// `Arc` across threads for sentence-level parallelism.
pub struct Dictionary {
    trie: LogicalTrie,
    compiled: Option<DoubleArrayTrie>,
    pos_table: InternTable,
    lemma_table: InternTable,
    probe_budget: usize,
}

impl Dictionary {
    /// Start an empty, mutable dictionary.
    pub fn new() -> Self {
        Self {
            trie: LogicalTrie::new(),
            compiled: None,
            pos_table: InternTable::new(),
            lemma_table: InternTable::new(),
            probe_budget: DEFAULT_PROBE_BUDGET,
        }
    }

    /// Build a finalized dictionary from a source in one step.
    pub fn build(source: DictionarySource) -> Result<Self> {
        let mut dict = Self::new();
        match source {
            DictionarySource::Defaults => dict.load_seed_json(default_seed_json())?,
            DictionarySource::Archive(path) => {
                let bytes = std::fs::read(&path).map_err(|e| {
                    crate::error::AnalyzerError::DataCorruption(format!(
                        "could not read archive {path:?}: {e}"
                    ))
                })?;
                let files = archive::read_archive(&bytes)?;
                let dict_json = files
                    .iter()
                    .find(|f| f.name == "dictionary.json")
                    .ok_or_else(|| {
                        crate::error::AnalyzerError::DataCorruption(
                            "archive missing dictionary.json".into(),
                        )
                    })?;
                dict.load_seed_json(std::str::from_utf8(&dict_json.data).map_err(|e| {
                    crate::error::AnalyzerError::DataCorruption(format!("non-UTF8 entry: {e}"))
                })?)?;
            }
            DictionarySource::Entries(entries) => {
                for (surface, pos, lemma) in entries {
                    dict.insert(&surface, pos, &lemma)?;
                }
            }
        }
        dict.finalize();
        Ok(dict)
    }

    fn load_seed_json(&mut self, json: &str) -> Result<()> {
        let entries: Vec<SeedEntry> = serde_json::from_str(json).map_err(|e| {
            crate::error::AnalyzerError::DataCorruption(format!("bad seed dictionary json: {e}"))
        })?;
        for entry in entries {
            let Some(pos) = PosTag::from_str(&entry.pos) else {
                warn!("seed dictionary entry with unknown POS {:?}, skipping", entry.pos);
                continue;
            };
            self.insert(&entry.surface, pos, &entry.lemma)?;
        }
        Ok(())
    }

    /// Add a surface to the trie, appending `(pos, lemma)` to the
    /// node's pattern set if absent.
    pub fn insert(&mut self, surface: &str, pos: PosTag, lemma: &str) -> Result<()> {
        let pos_id = self.pos_table.intern(pos.as_str());
        let lemma_id = self.lemma_table.intern(lemma);
        self.trie.insert(surface, (pos_id, lemma_id))
    }

    /// Compute failure links, augment pattern sets, and attempt a
    /// double-array compilation. Finalizes the trie against further
    /// inserts regardless of whether compilation succeeds.
    pub fn finalize(&mut self) {
        self.trie.build();
        self.compiled = self.trie.compile_double_array(self.probe_budget);
        if self.compiled.is_none() {
            warn!(
                "double-array compilation exhausted its probe budget ({} nodes); falling back to the plain trie",
                self.trie.node_count()
            );
        }
    }

    pub fn exists(&self, surface: &str) -> bool {
        self.trie.exists(surface)
    }

    /// Exact lookup, resolved to `(PosTag, lemma)` pairs.
    pub fn search(&self, surface: &str) -> Vec<(PosTag, String)> {
        self.resolve(self.trie.search(surface))
    }

    /// All-substring search resolved to `(PosTag, lemma)` pairs, in the
    /// (start, length, patterns) order the trie guarantees.
    pub fn search_all_patterns(&self, text: &str) -> Vec<(usize, usize, Vec<(PosTag, String)>)> {
        self.trie
            .search_all_patterns(text)
            .into_iter()
            .map(|(start, length, patterns)| (start, length, self.resolve(&patterns)))
            .collect()
    }

    fn resolve(&self, patterns: &[(u32, u32)]) -> Vec<(PosTag, String)> {
        patterns
            .iter()
            .filter_map(|&(pos_id, lemma_id)| {
                let pos = PosTag::from_str(self.pos_table.get(pos_id)?)?;
                let lemma = self.lemma_table.get(lemma_id)?.to_string();
                Some((pos, lemma))
            })
            .collect()
    }

    /// True when the last `finalize()` produced a working double-array
    /// acceleration layer rather than falling back to the plain trie.
    pub fn is_compiled(&self) -> bool {
        self.compiled.is_some()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Deserialize)]
struct SeedEntry {
    surface: String,
    pos: String,
    lemma: String,
}

fn default_seed_json() -> &'static str {
    include_str!("../../dictionaries/seed.json")
}
