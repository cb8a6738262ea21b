//! Job-shop problem instances.
//!
//! A [`Problem`] is a fixed pool of machines plus an ordered list of
//! [`Job`]s, each an ordered sequence of [`Operation`]s. Operation `k` of
//! a job may not start before operation `k - 1` of the same job has
//! finished, and a machine processes one operation at a time.
//!
//! Instances are validated once on construction and are read-only
//! afterwards; every algorithm in this crate takes them by reference.

use crate::error::ValidationError;

/// Upper limit on the sum of all operation durations in a problem: 2^53,
/// the largest range in which every integer is exact as an `f64`.
pub const MAX_HORIZON: u64 = 1 << 53;

/// One unit of work: a fixed duration on a fixed machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    /// Machine index in `[0, machine_count)`.
    pub machine: usize,
    /// Processing time. Always positive in a validated problem.
    pub duration: u64,
}

impl Operation {
    pub fn new(machine: usize, duration: u64) -> Self {
        Self { machine, duration }
    }
}

impl From<(usize, u64)> for Operation {
    fn from((machine, duration): (usize, u64)) -> Self {
        Self { machine, duration }
    }
}

/// An ordered sequence of operations. The order is the job's precedence
/// chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Job {
    operations: Vec<Operation>,
}

impl Job {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Builds a job from `(machine, duration)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        Self {
            operations: pairs.into_iter().map(Operation::from).collect(),
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the operation at `step`, if the job has that many.
    pub fn operation(&self, step: usize) -> Option<&Operation> {
        self.operations.get(step)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Sum of the job's operation durations.
    pub fn total_duration(&self) -> u64 {
        self.operations.iter().map(|op| op.duration).sum()
    }
}

/// A validated job-shop instance.
///
/// # Examples
///
/// ```
/// use jobshop_anneal::Problem;
///
/// let problem = Problem::builder(2)
///     .with_job([(0, 3), (1, 2)])
///     .with_job([(1, 2), (0, 4)])
///     .build()
///     .unwrap();
///
/// assert_eq!(problem.job_count(), 2);
/// assert_eq!(problem.total_operations(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProblem"))]
pub struct Problem {
    machine_count: usize,
    jobs: Vec<Job>,
}

impl Problem {
    /// Validates and builds a problem.
    ///
    /// Fails with the first offending operation, scanning jobs in index
    /// order and each job's operations in sequence order. An empty job
    /// list is accepted, as are jobs with no operations.
    ///
    /// The sum of all durations must not exceed [`MAX_HORIZON`]. Every
    /// finish time is bounded by that sum, so schedule arithmetic cannot
    /// overflow and makespans convert to `f64` exactly.
    pub fn new(machine_count: usize, jobs: Vec<Job>) -> Result<Self, ValidationError> {
        if machine_count == 0 {
            return Err(ValidationError::NoMachines);
        }
        let mut horizon = 0u64;
        for (job, j) in jobs.iter().enumerate() {
            for (step, op) in j.operations.iter().enumerate() {
                if op.machine >= machine_count {
                    return Err(ValidationError::MachineOutOfRange {
                        job,
                        step,
                        machine: op.machine,
                        machine_count,
                    });
                }
                if op.duration == 0 {
                    return Err(ValidationError::ZeroDuration { job, step });
                }
                horizon = horizon
                    .checked_add(op.duration)
                    .filter(|&h| h <= MAX_HORIZON)
                    .ok_or(ValidationError::HorizonOverflow { job, step })?;
            }
        }
        Ok(Self {
            machine_count,
            jobs,
        })
    }

    pub fn builder(machine_count: usize) -> ProblemBuilder {
        ProblemBuilder {
            machine_count,
            jobs: Vec::new(),
        }
    }

    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Number of operations across all jobs, i.e. the length of every
    /// valid execution order.
    pub fn total_operations(&self) -> usize {
        self.jobs.iter().map(Job::len).sum()
    }

    /// Length of the longest job.
    pub fn max_job_len(&self) -> usize {
        self.jobs.iter().map(Job::len).max().unwrap_or(0)
    }

    /// A lower bound on any schedule's makespan: the larger of the
    /// longest job chain and the most loaded machine.
    pub fn lower_bound(&self) -> u64 {
        let mut machine_load = vec![0u64; self.machine_count];
        for op in self.jobs.iter().flat_map(|j| j.operations.iter()) {
            machine_load[op.machine] += op.duration;
        }
        let longest_job = self.jobs.iter().map(Job::total_duration).max().unwrap_or(0);
        let busiest_machine = machine_load.into_iter().max().unwrap_or(0);
        longest_job.max(busiest_machine)
    }
}

/// Incremental [`Problem`] construction.
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    machine_count: usize,
    jobs: Vec<Job>,
}

impl ProblemBuilder {
    /// Appends a job given as `(machine, duration)` pairs.
    pub fn with_job<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.jobs.push(Job::from_pairs(pairs));
        self
    }

    pub fn build(self) -> Result<Problem, ValidationError> {
        Problem::new(self.machine_count, self.jobs)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProblem {
    machine_count: usize,
    jobs: Vec<Job>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProblem> for Problem {
    type Error = ValidationError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        Problem::new(raw.machine_count, raw.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Problem {
        Problem::builder(2)
            .with_job([(0, 3), (1, 2)])
            .with_job([(1, 2), (0, 4)])
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_valid() {
        let p = two_by_two();
        assert_eq!(p.machine_count(), 2);
        assert_eq!(p.job_count(), 2);
        assert_eq!(p.total_operations(), 4);
        assert_eq!(p.max_job_len(), 2);
        assert_eq!(p.job(1).unwrap().operation(1), Some(&Operation::new(0, 4)));
        assert!(p.job(2).is_none());
    }

    #[test]
    fn test_zero_machines() {
        let err = Problem::new(0, vec![]).unwrap_err();
        assert_eq!(err, ValidationError::NoMachines);
    }

    #[test]
    fn test_machine_out_of_range() {
        let err = Problem::builder(2)
            .with_job([(0, 1)])
            .with_job([(1, 1), (2, 4)])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MachineOutOfRange {
                job: 1,
                step: 1,
                machine: 2,
                machine_count: 2,
            }
        );
    }

    #[test]
    fn test_zero_duration() {
        let err = Problem::builder(1)
            .with_job([(0, 5), (0, 0)])
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::ZeroDuration { job: 0, step: 1 });
    }

    #[test]
    fn test_horizon_overflow_rejected() {
        let half = u64::MAX / 2 + 1;
        let err = Problem::builder(1)
            .with_job([(0, half)])
            .with_job([(0, half)])
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::HorizonOverflow { job: 0, step: 0 });

        let err = Problem::builder(2)
            .with_job([(0, MAX_HORIZON - 1)])
            .with_job([(1, 1), (1, 1)])
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::HorizonOverflow { job: 1, step: 1 });
    }

    #[test]
    fn test_horizon_at_limit_accepted() {
        let p = Problem::builder(1)
            .with_job([(0, MAX_HORIZON / 2)])
            .with_job([(0, MAX_HORIZON / 2)])
            .build()
            .unwrap();
        assert_eq!(p.lower_bound(), MAX_HORIZON);
        assert_eq!(crate::evaluate(&p, &[0, 1]).makespan, MAX_HORIZON);
        assert_eq!(crate::makespan(&p, &[1, 0]), MAX_HORIZON);
    }

    #[test]
    fn test_first_error_wins() {
        let err = Problem::builder(1)
            .with_job([(0, 0)])
            .with_job([(7, 1)])
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::ZeroDuration { job: 0, step: 0 });
    }

    #[test]
    fn test_empty_instance_is_valid() {
        let p = Problem::new(3, vec![]).unwrap();
        assert_eq!(p.total_operations(), 0);
        assert_eq!(p.max_job_len(), 0);
        assert_eq!(p.lower_bound(), 0);
    }

    #[test]
    fn test_empty_job_is_valid() {
        let p = Problem::builder(1)
            .with_job(Vec::<(usize, u64)>::new())
            .with_job([(0, 2)])
            .build()
            .unwrap();
        assert!(p.job(0).unwrap().is_empty());
        assert_eq!(p.total_operations(), 1);
    }

    #[test]
    fn test_lower_bound() {
        // Job chains: 5 and 6. Machine loads: m0 = 7, m1 = 4.
        assert_eq!(two_by_two().lower_bound(), 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_and_validation() {
        let p = two_by_two();
        let json = serde_json::to_string(&p).unwrap();
        let back: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        let bad = r#"{"machine_count":1,"jobs":[[{"machine":3,"duration":1}]]}"#;
        assert!(serde_json::from_str::<Problem>(bad).is_err());
    }
}
