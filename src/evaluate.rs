//! Makespan evaluation of an execution order.
//!
//! An execution order is a sequence of job indices in which job `j`
//! appears once per operation. The `n`-th occurrence of `j` designates
//! operation `n` of job `j`. Evaluation walks the order left to right and
//! starts every operation as early as both its machine and its job
//! predecessor allow.
//!
//! # Reference
//! Cheng, Gen & Tsujimura (1996), "A Tutorial Survey of Job-Shop Scheduling
//! Problems using Genetic Algorithms", operation-based representation.

use crate::problem::Problem;

/// Timing of one scheduled operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingRecord {
    pub machine: usize,
    pub job: usize,
    pub start: u64,
    pub end: u64,
    /// Position of the operation within its job (0-based).
    pub operation: usize,
}

impl TimingRecord {
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// Result of evaluating an execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Latest machine finish time, 0 for an empty order.
    pub makespan: u64,
    /// One record per processed token, in order of processing.
    pub records: Vec<TimingRecord>,
    /// Time each machine becomes free after the last operation.
    pub machine_finish_times: Vec<u64>,
    /// Time each job's last processed operation finishes.
    pub job_finish_times: Vec<u64>,
    /// Tokens that were ignored because their job had no operation left
    /// or the index named no job.
    pub skipped: usize,
}

impl Evaluation {
    /// Records for one machine, ordered by start time.
    pub fn machine_records(&self, machine: usize) -> Vec<TimingRecord> {
        let mut out: Vec<TimingRecord> = self
            .records
            .iter()
            .filter(|r| r.machine == machine)
            .copied()
            .collect();
        out.sort_by_key(|r| r.start);
        out
    }

    /// Records for one job, ordered by operation index.
    pub fn job_records(&self, job: usize) -> Vec<TimingRecord> {
        let mut out: Vec<TimingRecord> =
            self.records.iter().filter(|r| r.job == job).copied().collect();
        out.sort_by_key(|r| r.operation);
        out
    }
}

/// Evaluates `order` against `problem`.
///
/// Tokens whose job has already had all of its operations scheduled, and
/// tokens that name no job, are skipped and counted in
/// [`Evaluation::skipped`]. A well-formed order never skips.
///
/// Pure and deterministic: the same inputs always yield the same output.
///
/// # Examples
///
/// ```
/// use jobshop_anneal::{evaluate, Problem};
///
/// let problem = Problem::builder(2)
///     .with_job([(0, 3), (1, 2)])
///     .with_job([(1, 2), (0, 4)])
///     .build()
///     .unwrap();
///
/// let eval = evaluate(&problem, &[0, 1, 0, 1]);
/// assert_eq!(eval.makespan, 7);
/// assert_eq!(eval.records.len(), 4);
/// ```
pub fn evaluate(problem: &Problem, order: &[usize]) -> Evaluation {
    let mut records = Vec::with_capacity(order.len());
    let decoded = decode(problem, order, |record| records.push(record));

    if decoded.skipped > 0 {
        tracing::warn!(
            skipped = decoded.skipped,
            len = order.len(),
            "execution order has surplus tokens"
        );
    }

    Evaluation {
        makespan: decoded.machine_free.iter().copied().max().unwrap_or(0),
        records,
        machine_finish_times: decoded.machine_free,
        job_finish_times: decoded.job_free,
        skipped: decoded.skipped,
    }
}

/// Makespan of `order` without building timing records.
///
/// Same schedule semantics as [`evaluate`]; used in the search loop where
/// only the objective value matters.
pub fn makespan(problem: &Problem, order: &[usize]) -> u64 {
    decode(problem, order, |_| {})
        .machine_free
        .into_iter()
        .max()
        .unwrap_or(0)
}

struct Decoded {
    machine_free: Vec<u64>,
    job_free: Vec<u64>,
    skipped: usize,
}

/// Walks `order` once, reporting each scheduled operation to `on_op`.
///
/// The additions cannot overflow: `Problem::new` caps the sum of all
/// durations at [`MAX_HORIZON`](crate::problem::MAX_HORIZON), and no
/// finish time exceeds that sum.
fn decode(problem: &Problem, order: &[usize], mut on_op: impl FnMut(TimingRecord)) -> Decoded {
    let jobs = problem.jobs();
    let mut cursor = vec![0usize; jobs.len()];
    let mut machine_free = vec![0u64; problem.machine_count()];
    let mut job_free = vec![0u64; jobs.len()];
    let mut skipped = 0usize;

    for &j in order {
        let Some(op) = jobs.get(j).and_then(|job| job.operation(cursor[j])) else {
            skipped += 1;
            continue;
        };
        let start = machine_free[op.machine].max(job_free[j]);
        let end = start + op.duration;
        machine_free[op.machine] = end;
        job_free[j] = end;
        on_op(TimingRecord {
            machine: op.machine,
            job: j,
            start,
            end,
            operation: cursor[j],
        });
        cursor[j] += 1;
    }

    Decoded {
        machine_free,
        job_free,
        skipped,
    }
}
