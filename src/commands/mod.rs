//! Command implementations

pub mod benchmark;
pub mod check;
pub mod scramble;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_words};
pub use scramble::{ScrambleResult, scramble_round};
pub use simple::run_simple;
pub use solve::{SolveResult, solve_letters};
