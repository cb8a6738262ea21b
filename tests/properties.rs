mod common;

use jobshop_anneal::{
    anneal_with_rng, evaluate, greedy, neighbor, random_order, token_counts, Problem, SaConfig,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn problem_strategy() -> impl Strategy<Value = Problem> {
    (1usize..5).prop_flat_map(|machines| {
        prop::collection::vec(
            prop::collection::vec((0..machines, 1u64..20), 0..6),
            0..6,
        )
        .prop_map(move |jobs| {
            jobs.into_iter()
                .fold(Problem::builder(machines), |b, job| b.with_job(job))
                .build()
                .expect("generated problem is valid")
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn neighbor_conserves_tokens(problem in problem_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let order = random_order(&problem, &mut rng);
        let next = neighbor(&order, &mut rng);
        prop_assert_eq!(token_counts(&problem, &next), token_counts(&problem, &order));
        prop_assert_eq!(next.len(), order.len());
    }

    #[test]
    fn machines_never_overlap(problem in problem_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let order = random_order(&problem, &mut rng);
        let eval = evaluate(&problem, &order);
        for m in 0..problem.machine_count() {
            let recs = eval.machine_records(m);
            for w in recs.windows(2) {
                prop_assert!(w[0].end <= w[1].start);
            }
        }
    }

    #[test]
    fn job_precedence_holds(problem in problem_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let order = random_order(&problem, &mut rng);
        let eval = evaluate(&problem, &order);
        prop_assert_eq!(eval.records.len(), problem.total_operations());
        for j in 0..problem.job_count() {
            let recs = eval.job_records(j);
            for (k, r) in recs.iter().enumerate() {
                prop_assert_eq!(r.operation, k);
            }
            for w in recs.windows(2) {
                prop_assert!(w[0].start <= w[1].start);
                prop_assert!(w[0].end <= w[1].start);
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic(problem in problem_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let order = random_order(&problem, &mut rng);
        prop_assert_eq!(evaluate(&problem, &order), evaluate(&problem, &order));
    }

    #[test]
    fn makespan_bounded_below(problem in problem_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let order = random_order(&problem, &mut rng);
        let eval = evaluate(&problem, &order);
        prop_assert!(eval.makespan >= problem.lower_bound());
        prop_assert!(greedy(&problem).makespan >= problem.lower_bound());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn anneal_never_worse_than_its_start(problem in problem_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = anneal_with_rng(&problem, &SaConfig::default(), &mut rng).unwrap();
        prop_assert!(result.makespan <= result.initial_makespan);
        prop_assert_eq!(result.order.len(), problem.total_operations());
        prop_assert_eq!(result.iterations, 378);
    }
}
