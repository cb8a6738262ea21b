//! Job-shop scheduling by simulated annealing.
//!
//! Given jobs, each a fixed sequence of `(machine, duration)` operations,
//! and a pool of machines, find an operation execution order with a small
//! makespan while keeping every job's operations in sequence and every
//! machine busy with at most one operation at a time.
//!
//! - [`evaluate`]: deterministic list-scheduling of an execution order into
//!   timing records and a makespan.
//! - [`neighbor`]: the swap move over execution orders.
//! - [`anneal`]: simulated annealing driven by the generic [`sa`] engine.
//! - [`greedy`]: the round-robin baseline.
//! - [`compare`]: both on the same instance.
//!
//! # Example
//!
//! ```
//! use jobshop_anneal::{anneal, greedy, Problem, SaConfig};
//!
//! let problem = Problem::builder(3)
//!     .with_job([(0, 3), (1, 2), (2, 2)])
//!     .with_job([(0, 2), (2, 1), (1, 4)])
//!     .with_job([(1, 4), (2, 3)])
//!     .build()?;
//!
//! let annealed = anneal(&problem, &SaConfig::default().with_seed(42))?;
//! let baseline = greedy(&problem);
//!
//! assert!(annealed.makespan >= problem.lower_bound());
//! assert!(baseline.makespan >= problem.lower_bound());
//! # Ok::<(), jobshop_anneal::Error>(())
//! ```

pub mod anneal;
pub mod compare;
pub mod error;
pub mod evaluate;
pub mod greedy;
pub mod neighbor;
pub mod problem;
pub mod sa;

pub use anneal::{anneal, anneal_with_rng, AnnealResult, JobShopAnnealing};
pub use compare::{compare, machine_utilization, Comparison};
pub use error::{Error, Result, ValidationError};
pub use evaluate::{evaluate, makespan, Evaluation, TimingRecord};
pub use greedy::{greedy, round_robin_order, GreedyResult};
pub use neighbor::{initial_order, is_valid_order, neighbor, random_order, token_counts};
pub use problem::{Job, Operation, Problem, ProblemBuilder, MAX_HORIZON};
pub use sa::{CoolingSchedule, SaConfig};
