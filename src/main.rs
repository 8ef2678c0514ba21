//! Wordstack - CLI
//!
//! Two-word unscramble puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordstack::{
    commands::{check_words, run_benchmark, run_simple, scramble_round, solve_letters},
    config::{DEFAULT_WORD_LENGTH, GameConfig},
    core::Word,
    dictionary::Dictionary,
    game::{GameSession, WinRule},
    logging::setup_logging,
    output::{
        print_benchmark_result, print_check_result, print_scramble_result, print_solve_result,
    },
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordstack",
    about = "Unscramble two interleaved words from a single stack of tiles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Require each row to spell its originally assigned word
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for reproducible rounds
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Directory for log files
    #[arg(long, global = true, default_value = "logs")]
    log_dir: PathBuf,

    /// Log at debug level
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line, no TUI)
    Simple,

    /// Print one scrambled round
    Scramble {
        /// Also print the hidden words
        #[arg(short, long)]
        reveal: bool,
    },

    /// Check whether two words form a winning arrangement
    Check {
        word1: String,
        word2: String,
    },

    /// List every way to split scrambled letters into two words
    Solve {
        /// The scrambled letters, top tile first
        letters: String,
    },

    /// Measure how ambiguous random scrambles are
    Benchmark {
        /// Number of rounds to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Load the dictionary based on the -w and -l flags
fn load_dictionary(wordlist: &str, length: usize) -> Result<Dictionary> {
    use wordstack::wordlists::loader::load_from_file;

    let words: Vec<Word> = match wordlist {
        "embedded" => words_from_slice(WORDS, length),
        path => load_from_file(path, length)
            .with_context(|| format!("Could not load dictionary from {path}"))?,
    };

    Dictionary::new(words, length)
        .with_context(|| format!("No {length}-letter words found in wordlist '{wordlist}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_logging(&cli.log_dir, "wordstack.log", cli.debug)?;

    let dictionary = load_dictionary(&cli.wordlist, cli.length)?;
    tracing::info!(words = dictionary.len(), length = cli.length, "dictionary loaded");

    let mut config = GameConfig::default().with_word_length(cli.length);
    if cli.strict {
        config = config.with_win_rule(WinRule::Assigned);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, &config),
        Commands::Simple => {
            let mut session = GameSession::from_config(dictionary, &config);
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Scramble { reveal } => {
            let result = scramble_round(&dictionary, &config)?;
            print_scramble_result(&result, reveal);
            Ok(())
        }
        Commands::Check { word1, word2 } => {
            let result =
                check_words(&word1, &word2, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Solve { letters } => {
            let result = solve_letters(&letters, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Generating {count} scrambled rounds...");
            let result = run_benchmark(&dictionary, count, config.seed.unwrap_or(0));
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: Dictionary, config: &GameConfig) -> Result<()> {
    use wordstack::interactive::{App, run_tui};

    let app = App::new(GameSession::from_config(dictionary, config));
    run_tui(app)
}
