//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the initial solution. Never below `best_cost`.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`, or from the OS
    /// when no seed is set.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`. `config.seed` is ignored.
    ///
    /// Each iteration generates one neighbor of the current solution and
    /// updates the best solution if the neighbor beats it. The neighbor
    /// becomes current if it is strictly cheaper, or otherwise with
    /// probability `exp(-(neighbor_cost - current_cost) / T)`. The
    /// temperature is cooled after every `iterations_per_temperature`
    /// iterations and the run ends once it is no longer above
    /// `min_temperature`.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let history_interval = 100.max(config.iterations_per_temperature);
        let mut cost_history = vec![best_cost];

        tracing::debug!(
            initial_cost,
            initial_temperature = config.initial_temperature,
            min_temperature = config.min_temperature,
            "annealing started"
        );

        'cooling: while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                    break 'cooling;
                }

                let neighbor = problem.neighbor(&current, rng);
                let neighbor_cost = problem.cost(&neighbor);

                if neighbor_cost < best_cost {
                    best = neighbor.clone();
                    best_cost = neighbor_cost;
                    tracing::trace!(best_cost, iteration = total_iterations, temperature, "new best");
                }

                // Metropolis acceptance criterion
                let delta = neighbor_cost - current_cost;
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;
                }

                total_iterations += 1;

                if total_iterations.is_multiple_of(history_interval) {
                    cost_history.push(best_cost);
                }
            }

            temperature = config.cooling.cool(temperature);
        }

        if cost_history.last().is_none_or(|&last| last != best_cost) {
            cost_history.push(best_cost);
        }

        tracing::debug!(
            best_cost,
            iterations = total_iterations,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}
