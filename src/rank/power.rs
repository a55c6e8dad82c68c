//! Damped power iteration
//!
//! Implements the classic PageRank update with uniform teleportation and
//! dead-end mass redistribution, run for a fixed number of rounds.

use rayon::prelude::*;

use super::RankResult;
use crate::error::{RankError, Result};
use crate::graph::csr::CsrGraph;

/// Node count at which round updates switch to the parallel path.
const PARALLEL_THRESHOLD: usize = 1024;

/// Fixed-round power iteration over an in-edge CSR graph
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Damping factor (probability of following an outgoing edge)
    pub damping: f64,
    /// Per-node tolerance for the convergence check
    pub tolerance: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: 0.8,
            tolerance: 1e-11,
        }
    }
}

impl PowerIteration {
    /// Create a new PowerIteration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Run exactly `iterations` rounds on a graph
    ///
    /// Scores start uniform at 1/N. Each round reads only the previous
    /// round's buffer; the next buffer is written in full and then the two
    /// are swapped, so updates within a round are simultaneous. Convergence
    /// is recorded the first time consecutive rounds agree within the
    /// tolerance on every node, but the loop never stops early; the flag is
    /// informational and the returned scores are the literal state after the
    /// final round. With `iterations` = 0 the uniform distribution is
    /// returned as-is.
    ///
    /// Returns [`RankError::EmptyGraph`] for a graph with no nodes.
    pub fn run(&self, graph: &CsrGraph, iterations: usize) -> Result<RankResult> {
        let n = graph.num_nodes;
        if n == 0 {
            return Err(RankError::EmptyGraph);
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("power_iteration", nodes = n, iterations).entered();

        let n_f64 = n as f64;
        let mut scores = vec![1.0 / n_f64; n];
        let mut new_scores = vec![0.0; n];

        let dangling = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n_f64;
        let mut converged_at = None;

        for round in 1..=iterations {
            // Dead-end mass is redistributed uniformly each round
            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
            let base = teleport + self.damping * dangling_mass / n_f64;

            self.update_round(graph, &scores, &mut new_scores, base);

            if converged_at.is_none() && within_tolerance(&scores, &new_scores, self.tolerance) {
                converged_at = Some(round);
                #[cfg(feature = "tracing")]
                tracing::debug!(round, "scores stabilized");
            }

            std::mem::swap(&mut scores, &mut new_scores);
        }

        Ok(RankResult::new(scores, iterations, converged_at))
    }

    /// Compute one full round into `next`, reading only `prev`
    fn update_round(&self, graph: &CsrGraph, prev: &[f64], next: &mut [f64], base: f64) {
        // Every in-edge source has out-degree >= 1 by construction, so the
        // division below cannot hit zero.
        let incoming = |node: usize| -> f64 {
            graph
                .in_edges(node as u32)
                .map(|(src, mult)| prev[src as usize] * mult as f64 / graph.degree(src) as f64)
                .sum()
        };

        if graph.num_nodes >= PARALLEL_THRESHOLD {
            next.par_iter_mut().enumerate().for_each(|(u, slot)| {
                *slot = base + self.damping * incoming(u);
            });
        } else {
            for (u, slot) in next.iter_mut().enumerate() {
                *slot = base + self.damping * incoming(u);
            }
        }
    }
}

/// True when `prev` and `next` agree within `tolerance` on every node
fn within_tolerance(prev: &[f64], next: &[f64], tolerance: f64) -> bool {
    prev.len() == next.len()
        && prev
            .iter()
            .zip(next.iter())
            .all(|(old, new)| (old - new).abs() <= tolerance)
}
