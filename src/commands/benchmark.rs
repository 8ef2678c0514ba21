//! Benchmark command
//!
//! Generates many seeded rounds in parallel and measures how ambiguous the
//! scrambles are: how many distinct word pairs each one can be split into.

use crate::dictionary::Dictionary;
use crate::game::Scrambler;
use crate::solver::decompositions;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Aggregate statistics over the benchmarked rounds
pub struct BenchmarkResult {
    pub total_rounds: usize,
    /// Decomposition count → number of rounds with that many
    pub distribution: BTreeMap<usize, usize>,
    pub average_solutions: f64,
    pub max_solutions: usize,
    /// Scrambled letters of the round with the most decompositions
    pub most_ambiguous: Option<String>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

struct RoundStats {
    scrambled: String,
    solutions: usize,
}

/// Generate `count` rounds from seeds `seed..seed + count`
///
/// Round `i` always uses seed `seed + i`, so results do not depend on thread
/// scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
#[must_use]
pub fn run_benchmark(dictionary: &Dictionary, count: usize, seed: u64) -> BenchmarkResult {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("scrambling");

    let start = Instant::now();

    let rounds: Vec<RoundStats> = (0..count as u64)
        .into_par_iter()
        .filter_map(|i| {
            let mut scrambler = Scrambler::new(StdRng::seed_from_u64(seed.wrapping_add(i)));
            let round = scrambler.new_round(dictionary).ok()?;
            let scrambled = round.scrambled();
            let solutions = decompositions(scrambled.as_bytes(), dictionary).len();
            pb.inc(1);
            Some(RoundStats {
                scrambled,
                solutions,
            })
        })
        .collect();

    pb.finish_with_message("done");
    let duration = start.elapsed();

    summarize(&rounds, duration)
}

fn summarize(rounds: &[RoundStats], duration: Duration) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    for round in rounds {
        *distribution.entry(round.solutions).or_insert(0) += 1;
    }

    let total: usize = rounds.iter().map(|r| r.solutions).sum();
    let most = rounds.iter().max_by_key(|r| r.solutions);

    BenchmarkResult {
        total_rounds: rounds.len(),
        distribution,
        average_solutions: if rounds.is_empty() {
            0.0
        } else {
            total as f64 / rounds.len() as f64
        },
        max_solutions: most.map_or(0, |r| r.solutions),
        most_ambiguous: most.map(|r| r.scrambled.clone()),
        duration,
        rounds_per_second: if duration.as_secs_f64() > 0.0 {
            rounds.len() as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_round_has_at_least_its_own_words() {
        let dict = Dictionary::from_strs(&["apple", "beach", "crane", "slate"], 5).unwrap();
        let result = run_benchmark(&dict, 20, 0);

        assert_eq!(result.total_rounds, 20);
        assert!(!result.distribution.contains_key(&0));
        assert!(result.average_solutions >= 1.0);
        assert_eq!(result.distribution.values().sum::<usize>(), 20);
    }

    #[test]
    fn benchmark_is_deterministic_for_a_seed() {
        let dict = Dictionary::from_strs(&["apple", "beach", "crane", "slate"], 5).unwrap();
        let a = run_benchmark(&dict, 10, 42);
        let b = run_benchmark(&dict, 10, 42);
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.max_solutions, b.max_solutions);
    }

    #[test]
    fn summarize_empty() {
        let result = summarize(&[], Duration::ZERO);
        assert_eq!(result.total_rounds, 0);
        assert!(result.most_ambiguous.is_none());
        assert!(result.average_solutions.abs() < f64::EPSILON);
    }
}
