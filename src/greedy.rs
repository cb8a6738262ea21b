//! Round-robin baseline.
//!
//! Interleaves jobs by operation depth: every job's first operation in job
//! order, then every job's second operation, and so on. Deterministic and
//! evaluated once; it exists to give annealing results a reference point.

use crate::evaluate::{evaluate, TimingRecord};
use crate::problem::Problem;

/// Outcome of [`greedy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyResult {
    pub order: Vec<usize>,
    pub makespan: u64,
    pub records: Vec<TimingRecord>,
}

/// The round-robin execution order.
///
/// For jobs of lengths 2, 3 and 1 this is `[0, 1, 2, 0, 1, 1]`.
pub fn round_robin_order(problem: &Problem) -> Vec<usize> {
    let jobs = problem.jobs();
    let mut order = Vec::with_capacity(problem.total_operations());
    for step in 0..problem.max_job_len() {
        order.extend(
            jobs.iter()
                .enumerate()
                .filter(|(_, job)| job.len() > step)
                .map(|(j, _)| j),
        );
    }
    order
}

/// Builds and evaluates the round-robin order.
///
/// # Examples
///
/// ```
/// use jobshop_anneal::{greedy, Problem};
///
/// let problem = Problem::builder(1)
///     .with_job([(0, 2), (0, 3), (0, 5)])
///     .build()
///     .unwrap();
///
/// assert_eq!(greedy(&problem).makespan, 10);
/// ```
pub fn greedy(problem: &Problem) -> GreedyResult {
    let order = round_robin_order(problem);
    let evaluation = evaluate(problem, &order);
    tracing::debug!(
        makespan = evaluation.makespan,
        operations = order.len(),
        "round-robin baseline evaluated"
    );
    GreedyResult {
        order,
        makespan: evaluation.makespan,
        records: evaluation.records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbor::is_valid_order;

    #[test]
    fn test_round_robin_uneven_jobs() {
        let p = Problem::builder(3)
            .with_job([(0, 1), (1, 1)])
            .with_job([(2, 1), (0, 1), (1, 1)])
            .with_job([(1, 1)])
            .build()
            .unwrap();
        let order = round_robin_order(&p);
        assert_eq!(order, vec![0, 1, 2, 0, 1, 1]);
        assert!(is_valid_order(&p, &order));
    }

    #[test]
    fn test_single_job_single_machine() {
        let p = Problem::builder(1)
            .with_job([(0, 2), (0, 3), (0, 5)])
            .build()
            .unwrap();
        let result = greedy(&p);
        assert_eq!(result.order, vec![0, 0, 0]);
        assert_eq!(result.makespan, 10);
        assert_eq!(result.records.len(), 3);
    }

    #[test]
    fn test_two_by_two() {
        let p = Problem::builder(2)
            .with_job([(0, 3), (1, 2)])
            .with_job([(1, 2), (0, 4)])
            .build()
            .unwrap();
        let result = greedy(&p);
        assert_eq!(result.order, vec![0, 1, 0, 1]);
        assert_eq!(result.makespan, 7);
    }

    #[test]
    fn test_empty_problem() {
        let p = Problem::new(4, vec![]).unwrap();
        let result = greedy(&p);
        assert!(result.order.is_empty());
        assert_eq!(result.makespan, 0);
    }

    #[test]
    fn test_deterministic() {
        let p = Problem::builder(2)
            .with_job([(0, 4), (1, 1)])
            .with_job([(0, 2)])
            .build()
            .unwrap();
        assert_eq!(greedy(&p), greedy(&p));
    }
}
