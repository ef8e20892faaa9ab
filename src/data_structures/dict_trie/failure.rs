// Copyright (c) 2025 CJK Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Aho-Corasick failure-link construction.

use std::collections::VecDeque;

use super::error::{DictTrieError, DictTrieResult};
use super::{DictTrie, NodeId, ROOT};

impl<V> DictTrie<V> {
    /// Builds failure links for every node in a single breadth-first pass.
    ///
    /// The root fails to itself and depth-1 nodes fail to the root. Every other
    /// node re-drives its incoming character through its parent's failure chain.
    /// Links are computed over the structural node set, so soft-deleted nodes
    /// still take part.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Links were built and the node set is now frozen.
    /// * `Err(DictTrieError::AlreadyBuilt)` - Links already exist, nothing changed.
    pub fn build_failure_links(&mut self) -> DictTrieResult<()> {
        if self.failure_built {
            return Err(DictTrieError::AlreadyBuilt);
        }

        let mut queue = VecDeque::with_capacity(self.nodes.len());
        self.nodes[ROOT].failure = Some(ROOT);

        let first_level: Vec<NodeId> = self.nodes[ROOT].children.values().copied().collect();
        for child in first_level {
            self.nodes[child].failure = Some(ROOT);
            queue.push_back(child);
        }

        while let Some(parent) = queue.pop_front() {
            let edges: Vec<(char, NodeId)> = self.nodes[parent]
                .children
                .iter()
                .map(|(&c, &child)| (c, child))
                .collect();

            for (c, child) in edges {
                let target = self.failure_target(parent, c);
                self.nodes[child].failure = Some(target);
                queue.push_back(child);
            }
        }

        self.failure_built = true;
        tracing::debug!(nodes = self.nodes.len(), "Failure links built");
        Ok(())
    }

    /// Follows the failure chain of `parent` until a node with a `c` edge is found.
    fn failure_target(&self, parent: NodeId, c: char) -> NodeId {
        let mut state = self.nodes[parent].failure.unwrap_or(ROOT);
        loop {
            if let Some(&next) = self.nodes[state].children.get(&c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].failure.unwrap_or(ROOT);
        }
    }
}
