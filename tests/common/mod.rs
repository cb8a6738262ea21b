#![allow(dead_code)]

use jobshop_anneal::Problem;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a test-writer subscriber once per test binary. `RUST_LOG`
/// overrides the default `debug` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

pub fn two_by_two() -> Problem {
    Problem::builder(2)
        .with_job([(0, 3), (1, 2)])
        .with_job([(1, 2), (0, 4)])
        .build()
        .unwrap()
}

/// Fisher & Thompson (1963) ft06, optimum 55.
pub fn ft06() -> Problem {
    Problem::builder(6)
        .with_job([(2, 1), (0, 3), (1, 6), (3, 7), (5, 3), (4, 6)])
        .with_job([(1, 8), (2, 5), (4, 10), (5, 10), (0, 10), (3, 4)])
        .with_job([(2, 5), (3, 4), (5, 8), (0, 9), (1, 1), (4, 7)])
        .with_job([(1, 5), (0, 5), (2, 5), (3, 3), (4, 8), (5, 9)])
        .with_job([(2, 9), (1, 3), (4, 5), (5, 4), (0, 3), (3, 1)])
        .with_job([(1, 3), (3, 3), (5, 9), (0, 10), (4, 4), (2, 1)])
        .build()
        .unwrap()
}
