//! Execution-order construction and perturbation.
//!
//! Every function here preserves the per-job token counts of its input,
//! so an order that is valid for a problem stays valid.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::problem::Problem;

/// Concatenates `len(job)` copies of each job index, in job order.
///
/// `[0, 0, 1, 1, 1, 2]` for jobs of lengths 2, 3 and 1.
pub fn initial_order(problem: &Problem) -> Vec<usize> {
    problem
        .jobs()
        .iter()
        .enumerate()
        .flat_map(|(j, job)| std::iter::repeat_n(j, job.len()))
        .collect()
}

/// A uniformly shuffled [`initial_order`].
pub fn random_order<R: Rng>(problem: &Problem, rng: &mut R) -> Vec<usize> {
    let mut order = initial_order(problem);
    order.shuffle(rng);
    order
}

/// Swaps two distinct, uniformly chosen positions of `order`.
///
/// Returns a copy; the input is left intact. Orders shorter than two
/// tokens are returned unchanged.
///
/// # Examples
///
/// ```
/// use jobshop_anneal::neighbor;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let order = vec![0, 0, 1, 2];
/// let next = neighbor(&order, &mut rng);
///
/// let diff = order.iter().zip(&next).filter(|(a, b)| a != b).count();
/// assert!(diff == 0 || diff == 2);
/// ```
pub fn neighbor<R: Rng>(order: &[usize], rng: &mut R) -> Vec<usize> {
    let mut next = order.to_vec();
    swap_distinct(&mut next, rng);
    next
}

/// In-place form of [`neighbor`].
pub fn swap_distinct<R: Rng>(order: &mut [usize], rng: &mut R) {
    let n = order.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    order.swap(i, j);
}

/// Number of tokens per job in `order`, sized to the problem's job count.
/// Tokens that name no job are ignored.
pub fn token_counts(problem: &Problem, order: &[usize]) -> Vec<usize> {
    let mut counts = vec![0usize; problem.job_count()];
    for &j in order {
        if let Some(c) = counts.get_mut(j) {
            *c += 1;
        }
    }
    counts
}

/// Whether every job appears exactly once per operation and no token
/// names an unknown job.
pub fn is_valid_order(problem: &Problem, order: &[usize]) -> bool {
    order.len() == problem.total_operations()
        && token_counts(problem, order)
            .iter()
            .zip(problem.jobs())
            .all(|(&count, job)| count == job.len())
}
