//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The implementor supplies the initial solution, the neighbor move and
/// the cost function. [`SaRunner`](super::SaRunner) handles temperature,
/// acceptance and cooling.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use jobshop_anneal::sa::SaProblem;
/// use rand::Rng;
///
/// // Sort a permutation: cost is the number of misplaced elements.
/// struct Sorting { n: usize }
///
/// impl SaProblem for Sorting {
///     type Solution = Vec<usize>;
///
///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
///         (0..self.n).rev().collect()
///     }
///
///     fn cost(&self, perm: &Vec<usize>) -> f64 {
///         perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
///     }
///
///     fn neighbor<R: Rng>(&self, perm: &Vec<usize>, rng: &mut R) -> Vec<usize> {
///         let mut next = perm.clone();
///         jobshop_anneal::neighbor::swap_distinct(&mut next, rng);
///         next
///     }
/// }
/// ```
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    ///
    /// Must be deterministic: the runner caches the cost of the current
    /// solution instead of recomputing it every iteration.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution without modifying it.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
