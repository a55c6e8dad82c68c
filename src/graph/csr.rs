//! Compressed Sparse Row (CSR) graph representation
//!
//! The CSR here is keyed by *destination*: each row holds a node's incoming
//! edges, which is the access pattern of the rank update (every node sums
//! mass arriving from its predecessors).

use rustc_hash::FxHashMap;

use super::builder::LinkGraphBuilder;

/// A directed multigraph frozen into in-edge CSR form
///
/// Parallel edges are collapsed into a multiplicity count per (source,
/// destination) pair; out-degrees still count every occurrence, so an edge
/// appearing k times carries k shares of its source's mass.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node u's incoming edges are at in_row_ptr[u]..in_row_ptr[u+1]
    pub in_row_ptr: Vec<usize>,
    /// Source node for each incoming edge entry
    pub in_src: Vec<u32>,
    /// Occurrence count for each incoming edge entry
    pub in_mult: Vec<u32>,
    /// Out-degree per node, counting duplicate edges
    pub out_degree: Vec<u32>,
    /// Identifier for each node ID
    pub labels: Vec<String>,
}

impl CsrGraph {
    /// Convert a [`LinkGraphBuilder`] into in-edge CSR form
    pub fn from_builder(builder: &LinkGraphBuilder) -> Self {
        let num_nodes = builder.node_count();

        // Aggregate parallel edges per destination
        let mut incoming: Vec<FxHashMap<u32, u32>> = vec![FxHashMap::default(); num_nodes];
        for (from, to) in builder.edges() {
            *incoming[to as usize].entry(from).or_insert(0) += 1;
        }

        let mut in_row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut in_src = Vec::new();
        let mut in_mult = Vec::new();

        in_row_ptr.push(0);
        for row in &incoming {
            // Sort by source for deterministic iteration
            let mut entries: Vec<_> = row.iter().map(|(&s, &m)| (s, m)).collect();
            entries.sort_by_key(|(s, _)| *s);

            for (source, mult) in entries {
                in_src.push(source);
                in_mult.push(mult);
            }
            in_row_ptr.push(in_src.len());
        }

        Self {
            num_nodes,
            in_row_ptr,
            in_src,
            in_mult,
            out_degree: builder.nodes().map(|(_, _, deg)| deg).collect(),
            labels: builder.nodes().map(|(_, label, _)| label.to_string()).collect(),
        }
    }

    /// Iterate over a node's incoming edges as (source, multiplicity)
    pub fn in_edges(&self, node: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let start = self.in_row_ptr[node as usize];
        let end = self.in_row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.in_src[i], self.in_mult[i]))
    }

    /// Get the out-degree of a node, duplicate edges included
    pub fn degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    /// Get the identifier for a node
    pub fn label(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Total number of edge occurrences, duplicates included
    pub fn num_edges(&self) -> usize {
        self.in_mult.iter().map(|&m| m as usize).sum()
    }

    /// Find dead-end nodes (nodes with no outgoing edges)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree[n as usize] == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            in_row_ptr: vec![0],
            in_src: Vec::new(),
            in_mult: Vec::new(),
            out_degree: Vec::new(),
            labels: Vec::new(),
        }
    }
}
