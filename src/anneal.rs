//! Simulated annealing over job-shop execution orders.
//!
//! The search state is an execution order (see [`crate::evaluate`]). It
//! starts as a uniform shuffle of every job's tokens, moves by swapping
//! two positions, and is scored by its makespan.

use rand::Rng;

use crate::error::Result;
use crate::evaluate::{evaluate, makespan, TimingRecord};
use crate::neighbor::{neighbor, random_order};
use crate::problem::Problem;
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};

/// [`SaProblem`] adapter for a job-shop instance.
#[derive(Debug, Clone, Copy)]
pub struct JobShopAnnealing<'a> {
    problem: &'a Problem,
}

impl<'a> JobShopAnnealing<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    pub fn problem(&self) -> &'a Problem {
        self.problem
    }
}

impl SaProblem for JobShopAnnealing<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        random_order(self.problem, rng)
    }

    fn cost(&self, order: &Vec<usize>) -> f64 {
        makespan(self.problem, order) as f64
    }

    fn neighbor<R: Rng>(&self, order: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        neighbor(order, rng)
    }
}

/// Outcome of [`anneal`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealResult {
    /// Best execution order found.
    pub order: Vec<usize>,
    /// Makespan of `order`.
    pub makespan: u64,
    /// Timing of every operation under `order`.
    pub records: Vec<TimingRecord>,
    /// Makespan of the shuffled starting order.
    pub initial_makespan: u64,
    pub iterations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    pub final_temperature: f64,
    /// Best makespan sampled during the run. Non-increasing.
    pub makespan_history: Vec<u64>,
}

impl AnnealResult {
    fn from_sa(problem: &Problem, sa: SaResult<Vec<usize>>) -> Self {
        let evaluation = evaluate(problem, &sa.best);
        AnnealResult {
            makespan: evaluation.makespan,
            records: evaluation.records,
            order: sa.best,
            initial_makespan: sa.initial_cost as u64,
            iterations: sa.iterations,
            accepted_moves: sa.accepted_moves,
            improving_moves: sa.improving_moves,
            final_temperature: sa.final_temperature,
            makespan_history: sa.cost_history.into_iter().map(|c| c as u64).collect(),
        }
    }
}

/// Minimizes the makespan of `problem` by simulated annealing.
///
/// Randomness comes from `config.seed` when set, otherwise from the OS.
/// An instance without operations yields an empty order and makespan 0.
///
/// # Examples
///
/// ```
/// use jobshop_anneal::{anneal, Problem, SaConfig};
///
/// let problem = Problem::builder(2)
///     .with_job([(0, 3), (1, 2)])
///     .with_job([(1, 2), (0, 4)])
///     .build()
///     .unwrap();
///
/// let result = anneal(&problem, &SaConfig::default().with_seed(1)).unwrap();
/// assert!(result.makespan >= problem.lower_bound());
/// assert_eq!(result.order.len(), 4);
/// ```
pub fn anneal(problem: &Problem, config: &SaConfig) -> Result<AnnealResult> {
    log_start(problem);
    let sa = SaRunner::run(&JobShopAnnealing::new(problem), config)?;
    Ok(finish(problem, sa))
}

/// [`anneal`] with an explicit random source. `config.seed` is ignored.
pub fn anneal_with_rng<R: Rng>(
    problem: &Problem,
    config: &SaConfig,
    rng: &mut R,
) -> Result<AnnealResult> {
    log_start(problem);
    let sa = SaRunner::run_with_rng(&JobShopAnnealing::new(problem), config, rng)?;
    Ok(finish(problem, sa))
}

fn log_start(problem: &Problem) {
    tracing::debug!(
        jobs = problem.job_count(),
        machines = problem.machine_count(),
        operations = problem.total_operations(),
        "annealing job-shop instance"
    );
}

fn finish(problem: &Problem, sa: SaResult<Vec<usize>>) -> AnnealResult {
    let result = AnnealResult::from_sa(problem, sa);
    tracing::info!(
        makespan = result.makespan,
        initial_makespan = result.initial_makespan,
        iterations = result.iterations,
        accepted_moves = result.accepted_moves,
        "annealing complete"
    );
    result
}
