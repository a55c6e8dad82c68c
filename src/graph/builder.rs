//! Edge-list graph builder with identifier interning
//!
//! This module provides a mutable builder that uses FxHashMap for O(1)
//! identifier lookups while recording every edge occurrence.

use rustc_hash::FxHashMap;

/// A mutable builder that accumulates a directed edge list.
///
/// Node identifiers are opaque strings; each distinct identifier is interned
/// to a dense `u32` id on first sight, whether it appears as a source or a
/// target. Edges are kept as an occurrence list: adding the same pair twice
/// records two edges, and each occurrence counts toward the source's
/// out-degree. Self-loops are ordinary edges.
#[derive(Debug, Clone, Default)]
pub struct LinkGraphBuilder {
    /// Maps identifier -> node ID
    label_to_id: FxHashMap<String, u32>,
    /// Interned identifiers, indexed by node ID
    labels: Vec<String>,
    /// Out-degree per node ID, counting duplicate edges
    out_degree: Vec<u32>,
    /// Every edge occurrence as (source ID, target ID)
    edges: Vec<(u32, u32)>,
}

impl LinkGraphBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            labels: Vec::with_capacity(node_capacity),
            out_degree: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    /// Build directly from a sequence of (source, target) identifier pairs
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, S)]) -> Self {
        let mut builder = Self::with_capacity(pairs.len(), pairs.len());
        for (source, target) in pairs {
            builder.add_edge(source.as_ref(), target.as_ref());
        }
        builder
    }

    /// Get or create a node for the given identifier, returning its ID
    pub fn get_or_create_node(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.labels.len() as u32;
        self.label_to_id.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        self.out_degree.push(0);
        id
    }

    /// Record one directed edge occurrence from `source` to `target`
    ///
    /// Both endpoints are interned if new. Duplicates are not collapsed and
    /// self-loops are accepted.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let from = self.get_or_create_node(source);
        let to = self.get_or_create_node(target);
        self.out_degree[from as usize] += 1;
        self.edges.push((from, to));
    }

    /// Number of distinct nodes seen so far
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edge occurrences, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Out-degree of a node, or `None` for an unknown ID
    pub fn out_degree(&self, id: u32) -> Option<u32> {
        self.out_degree.get(id as usize).copied()
    }

    /// Node ID for an identifier, if it has been seen
    pub fn node_id(&self, label: &str) -> Option<u32> {
        self.label_to_id.get(label).copied()
    }

    /// Identifier for a node ID
    pub fn label(&self, id: u32) -> Option<&str> {
        self.labels.get(id as usize).map(String::as_str)
    }

    /// Iterate over (node ID, identifier, out-degree)
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &str, u32)> {
        self.labels
            .iter()
            .zip(self.out_degree.iter())
            .enumerate()
            .map(|(i, (label, &deg))| (i as u32, label.as_str(), deg))
    }

    /// Iterate over every edge occurrence as (source ID, target ID)
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edges.iter().copied()
    }

    /// Check if no nodes have been added
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
