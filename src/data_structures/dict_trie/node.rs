// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the dictionary trie.
//!
//! Nodes live in an index-addressed arena owned by [`DictTrie`](super::DictTrie).
//! Edges to children and failure links are plain [`NodeId`]s into that arena.

use fnv::FnvHashMap;

/// Index of a node inside the trie arena.
pub type NodeId = usize;

/// Liveness of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStatus {
    /// The node takes part in matching.
    #[default]
    Active,
    /// The node stays in the arena but is invisible to traversal.
    Deleted,
}

/// A node in the dictionary trie.
///
/// Each node represents one character of a pattern path. Accepting nodes carry
/// the value and the literal text of the entry ending there.
#[derive(Debug, Clone)]
pub struct Node<V> {
    /// Map of characters to child node ids
    pub(crate) children: FnvHashMap<char, NodeId>,

    /// Whether traversal may see this node
    pub(crate) status: NodeStatus,

    /// Value of the entry ending here, if any
    pub(crate) value: Option<V>,

    /// Literal text of the entry ending here
    pub(crate) output: Option<Box<str>>,

    /// Longest proper suffix that is also a trie path
    pub(crate) failure: Option<NodeId>,

    /// Number of characters between the root and this node
    pub(crate) depth: usize,
}

impl<V> Node<V> {
    /// Creates a new empty node at the given depth.
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            children: FnvHashMap::default(),
            status: NodeStatus::Active,
            value: None,
            output: None,
            failure: None,
            depth,
        }
    }

    /// Returns `true` if the node is active and terminates an entry.
    pub fn accepts(&self) -> bool {
        self.status == NodeStatus::Active && self.value.is_some()
    }

    /// Returns `true` unless the node was soft-deleted.
    pub fn is_active(&self) -> bool {
        self.status == NodeStatus::Active
    }

    /// Current liveness status.
    pub fn status(&self) -> NodeStatus {
        self.status
    }

    /// Value stored at this node, if it is accepting.
    pub fn value(&self) -> Option<&V> {
        if self.accepts() {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// Entry text stored at this node, if it is accepting.
    pub fn output(&self) -> Option<&str> {
        if self.accepts() {
            self.output.as_deref()
        } else {
            None
        }
    }

    /// Failure link target, present once failure links are built.
    pub fn failure(&self) -> Option<NodeId> {
        self.failure
    }

    /// Depth of the node, the root has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
