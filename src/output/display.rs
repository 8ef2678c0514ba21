//! Display functions for command results

use super::formatters::{create_progress_bar, slot_to_string, tiles_to_string};
use crate::commands::{BenchmarkResult, CheckResult, ScrambleResult, SolveResult};
use crate::core::Slot;
use crate::game::GameSession;
use colored::Colorize;
use rand::Rng;

/// Print the tile stack and both slots
pub fn print_board<R: Rng>(session: &GameSession<R>) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Tiles left ({}): {}",
        session.remaining_count(),
        tiles_to_string(session.remaining()).bright_yellow().bold()
    );
    for slot in Slot::ALL {
        println!(
            "  {}: {}",
            slot.to_string().bright_cyan(),
            slot_to_string(session.slot(slot)).bright_white().bold()
        );
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print one scrambled round
pub fn print_scramble_result(result: &ScrambleResult, reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scrambled: {}",
        result.scrambled.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if reveal {
        println!(
            "\n  Words:     {} {}",
            result.word1.to_uppercase().green(),
            result.word2.to_uppercase().green()
        );
    }
    println!("  Solutions: {}", result.solutions);
}

/// Print the verdict for a pair of words
pub fn print_check_result(result: &CheckResult) {
    let mark = |valid: bool| if valid { "✅" } else { "❌" };

    println!();
    println!("  {} {}", mark(result.valid1), result.guess1.to_uppercase());
    println!("  {} {}", mark(result.valid2), result.guess2.to_uppercase());
    println!();

    if result.won {
        println!("{}", "Both words are valid - that's a win!".green().bold());
    } else {
        println!("{}", "Not a valid solution".red().bold());
    }
}

/// Print every decomposition of a scrambled sequence
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR:".bright_cyan().bold(),
        result.letters.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.solutions.is_empty() {
        println!("\n{}", "No way to split these letters into two words".red());
        return;
    }

    println!();
    for (i, solution) in result.solutions.iter().enumerate() {
        let routing: String = solution
            .routing
            .iter()
            .map(|slot| match slot {
                Slot::First => '1',
                Slot::Second => '2',
            })
            .collect();
        println!(
            "  {}. {} {}  {}",
            (i + 1).to_string().bright_black(),
            solution.first.to_uppercase().bright_white().bold(),
            solution.second.to_uppercase().bright_white().bold(),
            routing.bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Ambiguity:".bright_cyan().bold());
    println!("   Rounds:             {}", result.total_rounds);
    println!(
        "   Average solutions:  {}",
        format!("{:.2}", result.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Most solutions:     {}",
        format!("{}", result.max_solutions).yellow()
    );
    if let Some(ref letters) = result.most_ambiguous {
        println!("   Most ambiguous:     {}", letters.to_uppercase());
    }
    println!("   Time taken:         {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:      {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&solutions, &count) in &result.distribution {
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {solutions:3}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
