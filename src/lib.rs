//! # rapid-linkrank
//!
//! PageRank scoring for in-memory directed edge lists.
//!
//! The crate takes a finite list of `(source, target)` identifier pairs,
//! derives the node set and out-degree structure, and runs the damped
//! random-walk update (damping 0.8, uniform teleportation, dead-end mass
//! redistributed across all nodes) for a caller-chosen number of rounds.
//! Duplicate edges are deliberately kept: an edge listed k times carries k
//! shares of its source's mass.
//!
//! The computation is pure and deterministic: identical inputs produce
//! bit-identical scores.
//!
//! ## Quick start
//!
//! ```
//! use rapid_linkrank::page_rank;
//!
//! let edges = [("a", "b"), ("b", "a")];
//! let scores = page_rank(&edges, 20).unwrap();
//!
//! assert!((scores["a"] - 0.5).abs() < 1e-9);
//! assert!((scores["b"] - 0.5).abs() < 1e-9);
//! ```
//!
//! For control over damping, tolerance, or access to convergence metadata,
//! build the graph explicitly and run [`PowerIteration`] yourself:
//!
//! ```
//! use rapid_linkrank::{CsrGraph, LinkGraphBuilder, PowerIteration};
//!
//! let builder = LinkGraphBuilder::from_pairs(&[("a", "b"), ("b", "c"), ("c", "a")]);
//! let graph = CsrGraph::from_builder(&builder);
//! let result = PowerIteration::new().run(&graph, 30).unwrap();
//!
//! assert_eq!(result.converged_at, Some(1));
//! ```

pub mod error;
pub mod graph;
pub mod rank;

pub use error::{RankError, Result};
pub use graph::{CsrGraph, LinkGraphBuilder};
pub use rank::{PowerIteration, RankResult};

use std::collections::HashMap;

/// Map every distinct node identifier in `edges` to its out-degree.
///
/// Each occurrence of an edge counts toward its source's out-degree;
/// duplicates are not collapsed. Identifiers appearing only as a target are
/// present with out-degree 0. An empty edge list yields an empty map.
///
/// ```
/// use rapid_linkrank::out_degree_map;
///
/// let degrees = out_degree_map(&[("a", "b"), ("a", "b"), ("a", "c")]);
/// assert_eq!(degrees["a"], 3);
/// assert_eq!(degrees["b"], 0);
/// ```
pub fn out_degree_map<S: AsRef<str>>(edges: &[(S, S)]) -> HashMap<String, u32> {
    LinkGraphBuilder::from_pairs(edges)
        .nodes()
        .map(|(_, label, degree)| (label.to_string(), degree))
        .collect()
}

/// Compute PageRank scores for the nodes of a directed edge list.
///
/// Runs exactly `iterations` rounds of the damped update with the default
/// damping factor 0.8; zero rounds returns the uniform distribution 1/N.
/// The result maps every node identifier to its final score, including dead
/// ends and nodes that only appear as a target.
///
/// Returns [`RankError::EmptyGraph`] when `edges` yields no nodes.
pub fn page_rank<S: AsRef<str>>(
    edges: &[(S, S)],
    iterations: usize,
) -> Result<HashMap<String, f64>> {
    let builder = LinkGraphBuilder::from_pairs(edges);
    let graph = CsrGraph::from_builder(&builder);
    let result = PowerIteration::new().run(&graph, iterations)?;

    Ok(graph.labels.into_iter().zip(result.scores).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Five-page link sample: mnop fans out to three pages, ghi is a dead end
    fn sample_links() -> Vec<(&'static str, &'static str)> {
        vec![
            ("abc", "def"),
            ("abc", "ghi"),
            ("def", "jkl"),
            ("jkl", "mnop"),
            ("mnop", "abc"),
            ("mnop", "def"),
            ("mnop", "ghi"),
        ]
    }

    #[test]
    fn test_out_degree_map_covers_every_node() {
        let degrees = out_degree_map(&sample_links());

        assert_eq!(degrees.len(), 5);
        assert_eq!(degrees["abc"], 2);
        assert_eq!(degrees["def"], 1);
        assert_eq!(degrees["ghi"], 0);
        assert_eq!(degrees["jkl"], 1);
        assert_eq!(degrees["mnop"], 3);
    }

    #[test]
    fn test_out_degree_map_empty_input() {
        let edges: [(&str, &str); 0] = [];
        assert!(out_degree_map(&edges).is_empty());
    }

    #[test]
    fn test_page_rank_keys_match_node_set() {
        let links = sample_links();
        let scores = page_rank(&links, 100).unwrap();
        let degrees = out_degree_map(&links);

        assert_eq!(scores.len(), degrees.len());
        for key in degrees.keys() {
            assert!(scores.contains_key(key), "missing node {key}");
        }

        let sum: f64 = scores.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        for (key, &score) in &scores {
            assert!(score > 0.0, "non-positive score for {key}");
        }
    }

    #[test]
    fn test_page_rank_sample_ranks_hub_highest() {
        let scores = page_rank(&sample_links(), 100).unwrap();

        // mnop is fed by the whole chain and splits back into it
        let top = scores
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap();
        assert_eq!(top.0, "mnop");
    }

    #[test]
    fn test_page_rank_zero_iterations_is_uniform() {
        let scores = page_rank(&sample_links(), 0).unwrap();

        for &score in scores.values() {
            assert_eq!(score, 1.0 / 5.0);
        }
    }

    #[test]
    fn test_page_rank_empty_edge_list_fails_fast() {
        let edges: [(&str, &str); 0] = [];
        assert_eq!(page_rank(&edges, 10).unwrap_err(), RankError::EmptyGraph);
    }

    #[test]
    fn test_page_rank_owned_identifiers() {
        let edges: Vec<(String, String)> = vec![("x".into(), "y".into())];
        let scores = page_rank(&edges, 10).unwrap();

        assert_eq!(scores.len(), 2);
        assert!(scores["y"] > scores["x"]);
    }
}
