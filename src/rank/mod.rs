//! Rank iteration
//!
//! This module runs the damped random-walk fixed-point update and reports
//! the resulting scores.

pub mod power;

pub use power::PowerIteration;

use serde::Serialize;

/// Result of a rank computation
#[derive(Debug, Clone, Serialize)]
pub struct RankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of rounds performed (always the requested count)
    pub iterations: usize,
    /// 1-based round at which convergence was first observed, if ever
    pub converged_at: Option<usize>,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize, converged_at: Option<usize>) -> Self {
        Self {
            scores,
            iterations,
            converged_at,
        }
    }

    /// Whether convergence was observed at any round
    pub fn converged(&self) -> bool {
        self.converged_at.is_some()
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}
