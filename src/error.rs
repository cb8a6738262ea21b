//! Error types.

use thiserror::Error;

/// A malformed problem instance, reported before any optimization runs.
///
/// `job` and `step` are 0-based indices into the job list and the job's
/// operation sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The machine pool is empty.
    #[error("machine count must be positive")]
    NoMachines,

    /// An operation names a machine outside `[0, machine_count)`.
    #[error("job {job} step {step}: machine {machine} out of range (machine count {machine_count})")]
    MachineOutOfRange {
        job: usize,
        step: usize,
        machine: usize,
        machine_count: usize,
    },

    /// An operation has a zero duration.
    #[error("job {job} step {step}: duration must be positive")]
    ZeroDuration { job: usize, step: usize },

    /// Adding this operation pushes the sum of all durations past
    /// [`MAX_HORIZON`](crate::problem::MAX_HORIZON).
    #[error("job {job} step {step}: total duration exceeds the schedulable horizon")]
    HorizonOverflow { job: usize, step: usize },
}

/// Crate-level error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid problem: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
