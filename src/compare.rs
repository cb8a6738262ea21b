//! Annealing versus the round-robin baseline on one instance.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::anneal::{anneal, AnnealResult};
use crate::error::Result;
use crate::evaluate::TimingRecord;
use crate::greedy::{greedy, GreedyResult};
use crate::problem::Problem;
use crate::sa::SaConfig;

/// Both schedules for the same instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub annealed: AnnealResult,
    pub baseline: GreedyResult,
    /// [`Problem::lower_bound`] of the instance.
    pub lower_bound: u64,
}

impl Comparison {
    /// Baseline makespan minus annealed makespan. Positive when annealing
    /// wins.
    pub fn gap(&self) -> i64 {
        self.baseline.makespan as i64 - self.annealed.makespan as i64
    }

    /// `gap / baseline makespan`, 0.0 for an empty instance.
    pub fn relative_improvement(&self) -> f64 {
        if self.baseline.makespan == 0 {
            0.0
        } else {
            self.gap() as f64 / self.baseline.makespan as f64
        }
    }
}

/// Runs [`anneal`] and [`greedy`] on `problem`.
pub fn compare(problem: &Problem, config: &SaConfig) -> Result<Comparison> {
    let annealed = anneal(problem, config)?;
    let baseline = greedy(problem);
    let comparison = Comparison {
        annealed,
        baseline,
        lower_bound: problem.lower_bound(),
    };
    tracing::info!(
        annealed = comparison.annealed.makespan,
        baseline = comparison.baseline.makespan,
        lower_bound = comparison.lower_bound,
        gap = comparison.gap(),
        "annealing vs round-robin"
    );
    Ok(comparison)
}

/// Busy fraction of each machine over `[0, makespan)`.
///
/// All zeros when `makespan` is 0.
pub fn machine_utilization(
    machine_count: usize,
    records: &[TimingRecord],
    makespan: u64,
) -> Vec<f64> {
    let mut busy = vec![0u64; machine_count];
    for r in records {
        if let Some(b) = busy.get_mut(r.machine) {
            *b += r.duration();
        }
    }
    busy.into_iter()
        .map(|b| {
            if makespan == 0 {
                0.0
            } else {
                b as f64 / makespan as f64
            }
        })
        .collect()
}
