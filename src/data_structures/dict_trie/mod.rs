// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary Trie Implementation
//!
//! This module provides the character trie that every matching strategy walks.
//! Nodes are stored in an index-addressed arena: children and failure links are
//! plain indices, deletion flips a liveness flag instead of restructuring the
//! tree, and the whole structure is read-only once construction is finished.
//!
//! # Example
//!
//! ```
//! use cjk_match_lib::data_structures::dict_trie::DictTrie;
//!
//! let mut trie = DictTrie::new();
//! trie.insert("中国", "CN").unwrap();
//! trie.insert("中国人", "CNP").unwrap();
//!
//! assert_eq!(trie.get("中国"), Some(&"CN"));
//! assert_eq!(trie.len(), 2);
//!
//! trie.mark_deleted("中国");
//! assert!(!trie.contains("中国"));
//! ```

mod error;
mod failure;
mod node;
mod shared;

pub use error::{DictTrieError, DictTrieResult};
pub use node::{Node, NodeId, NodeStatus};
pub use shared::SharedDictionary;

/// Id of the root node in every trie arena.
pub const ROOT: NodeId = 0;

/// Configuration options for the dictionary trie
#[derive(Debug, Clone)]
pub struct DictTrieConfig {
    /// Maximum number of characters in a single pattern
    pub max_depth: usize,
}

impl Default for DictTrieConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Character trie holding `(pattern, value)` dictionary entries.
///
/// Key features:
/// * O(1) expected child lookup keyed by `char`
/// * Soft deletion that never invalidates node ids
/// * Optional Aho-Corasick failure links for overlap resolution
/// * `Send + Sync` whenever `V` is, so it can be shared for concurrent matching
#[derive(Debug, Clone)]
pub struct DictTrie<V> {
    /// Node arena, index 0 is the root
    nodes: Vec<Node<V>>,

    /// Number of live entries
    len: usize,

    /// Whether `build_failure_links` has run
    failure_built: bool,

    /// Configuration options
    config: DictTrieConfig,
}

impl<V> DictTrie<V> {
    /// Creates a new empty `DictTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(DictTrieConfig::default())
    }

    /// Creates a new empty `DictTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: DictTrieConfig) -> Self {
        Self {
            nodes: vec![Node::new(0)],
            len: 0,
            failure_built: false,
            config,
        }
    }

    /// Builds a trie from already-decoded dictionary entries.
    ///
    /// Later duplicates overwrite earlier ones.
    ///
    /// # Arguments
    ///
    /// * `entries` - `(pattern, value)` pairs.
    ///
    /// # Returns
    ///
    /// * `Ok(DictTrie)` - The populated trie.
    /// * `Err(DictTrieError)` - The first invalid pattern encountered.
    pub fn from_entries<I, P>(entries: I) -> DictTrieResult<Self>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
    {
        let mut trie = Self::new();
        for (pattern, value) in entries {
            trie.insert(pattern, value)?;
        }
        tracing::debug!(entries = trie.len, nodes = trie.nodes.len(), "Dictionary trie built");
        Ok(trie)
    }

    /// Inserts a pattern with its value, overwriting any previous value.
    ///
    /// # Arguments
    ///
    /// * `pattern` - Non-empty pattern text.
    /// * `value` - Value to associate with the pattern.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if a new entry was created, `false` if an existing one was replaced.
    /// * `Err(DictTrieError)` - If the pattern is empty or too long, or the node set is frozen.
    pub fn insert<P>(&mut self, pattern: P, value: V) -> DictTrieResult<bool>
    where
        P: AsRef<str>,
    {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Err(DictTrieError::InvalidPattern);
        }
        if self.failure_built {
            return Err(DictTrieError::AlreadyBuilt);
        }

        let depth = pattern.chars().count();
        if depth > self.config.max_depth {
            return Err(DictTrieError::PatternTooLong {
                pattern: pattern.to_string(),
                max_depth: self.config.max_depth,
            });
        }

        let mut current = ROOT;
        for c in pattern.chars() {
            current = match self.nodes[current].children.get(&c) {
                Some(&child) => {
                    if !self.nodes[child].is_active() {
                        self.revive(child);
                    }
                    child
                }
                None => {
                    let child = self.nodes.len();
                    let child_depth = self.nodes[current].depth + 1;
                    self.nodes.push(Node::new(child_depth));
                    self.nodes[current].children.insert(c, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        let is_new = node.value.is_none();
        node.value = Some(value);
        node.output = Some(pattern.into());
        if is_new {
            self.len += 1;
        }

        Ok(is_new)
    }

    /// Looks up a live child of `node` along `c`.
    ///
    /// Deleted children are reported as absent.
    #[inline]
    pub fn lookup_child(&self, node: NodeId, c: char) -> Option<NodeId> {
        let child = *self.nodes.get(node)?.children.get(&c)?;
        if self.nodes[child].is_active() {
            Some(child)
        } else {
            None
        }
    }

    /// Soft-deletes the entry for `pattern`.
    ///
    /// The terminal node stays in the arena, so entries sharing its prefix are
    /// untouched. Entries that extend through the deleted node become
    /// unreachable until an insert passes through it again, and stop counting
    /// towards [`len`](Self::len) meanwhile.
    ///
    /// # Returns
    ///
    /// `true` if a live entry was deleted, `false` if there was nothing to delete.
    pub fn mark_deleted<P>(&mut self, pattern: P) -> bool
    where
        P: AsRef<str>,
    {
        let pattern = pattern.as_ref();
        let node = match self.find_node(pattern) {
            Some(node) if node != ROOT && self.nodes[node].accepts() => node,
            _ => return false,
        };

        let hidden = self.live_entries_below(node);
        self.nodes[node].status = NodeStatus::Deleted;
        self.len -= 1 + hidden;
        tracing::debug!(pattern, hidden, "Dictionary entry marked deleted");
        true
    }

    /// Makes a deleted node traversable again without restoring its entry.
    ///
    /// Live entries below it become reachable and are counted again.
    fn revive(&mut self, id: NodeId) {
        let node = &mut self.nodes[id];
        node.status = NodeStatus::Active;
        node.value = None;
        node.output = None;
        self.len += self.live_entries_below(id);
    }

    /// Number of accepting nodes below `id` reachable through live nodes.
    fn live_entries_below(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut stack: Vec<NodeId> = self.nodes[id].children.values().copied().collect();
        while let Some(child) = stack.pop() {
            let node = &self.nodes[child];
            if !node.is_active() {
                continue;
            }
            if node.value.is_some() {
                count += 1;
            }
            stack.extend(node.children.values().copied());
        }
        count
    }

    /// Walks `pattern` from the root through live nodes.
    pub fn find_node<P>(&self, pattern: P) -> Option<NodeId>
    where
        P: AsRef<str>,
    {
        pattern
            .as_ref()
            .chars()
            .try_fold(ROOT, |node, c| self.lookup_child(node, c))
    }

    /// Retrieves the value stored for `pattern`.
    pub fn get<P>(&self, pattern: P) -> Option<&V>
    where
        P: AsRef<str>,
    {
        let node = self.find_node(pattern)?;
        self.nodes[node].value()
    }

    /// Checks if `pattern` is a live entry.
    pub fn contains<P>(&self, pattern: P) -> bool
    where
        P: AsRef<str>,
    {
        self.get(pattern).is_some()
    }

    /// Returns the node stored at `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id)
    }

    /// Id of the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Returns `true` if `id` is a live accepting node.
    #[inline]
    pub fn accepts(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(Node::accepts)
    }

    /// Value of the entry ending at `id`.
    #[inline]
    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.nodes.get(id)?.value()
    }

    /// Text of the entry ending at `id`.
    #[inline]
    pub fn output(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id)?.output()
    }

    /// Failure link of `id`, present once failure links are built.
    #[inline]
    pub fn failure(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.failure
    }

    /// Whether `build_failure_links` has run.
    pub fn has_failure_links(&self) -> bool {
        self.failure_built
    }

    /// Number of entries a matcher can reach.
    ///
    /// Entries below a deleted node are not counted, so `len` agrees with
    /// [`contains`](Self::contains).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie has no live entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of nodes in the arena, deleted ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the configuration of the trie.
    pub fn config(&self) -> &DictTrieConfig {
        &self.config
    }
}

impl<V> Default for DictTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}
