//! Word Jumble - CLI
//!
//! Jumble game with TUI and CLI modes, plus dictionary query commands.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use word_jumble::{
    commands::{
        new_game, palindrome_words, prefix_words, run_benchmark, run_simple, scramble_word,
        search_words, sub_words, suffix_words, word_exists,
    },
    core::DictionaryIndex,
    engine::{DEFAULT_GAME_LENGTH, DEFAULT_MIN_LENGTH, GameEngine, SearchCriteria},
    logging::{LogConfig, init_logging},
    output::{
        print_benchmark_result, print_exists_result, print_game_snapshot, print_scramble_result,
        print_word_list,
    },
    wordlists::loader::DictionarySource,
};

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Word jumble: unscramble the letters and find every hidden word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },

    /// Simple CLI mode (text game loop without TUI)
    Simple {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },

    /// Create a puzzle and print its opening state
    New {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scramble the letters of a word
    Scramble {
        /// Word to scramble
        word: String,
    },

    /// List palindromes in the dictionary
    Palindromes,

    /// Check whether a word is in the dictionary
    Exists {
        /// Word to look up
        word: String,
    },

    /// List words starting with a prefix
    Prefix {
        /// Prefix to match (case-insensitive)
        prefix: String,
    },

    /// List words ending with a suffix
    Suffix {
        /// Suffix to match (case-insensitive)
        suffix: String,
    },

    /// Search by first letter, last letter and length
    Search {
        /// First letter
        #[arg(short, long)]
        start: Option<char>,

        /// Last letter
        #[arg(short, long)]
        end: Option<char>,

        /// Word length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List dictionary words buildable from a word's letters
    Subwords {
        /// Seed word
        word: String,

        /// Shortest sub-word to report
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,
    },

    /// Measure puzzle creation speed and sub-word counts
    Benchmark {
        /// Number of puzzles to create
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        #[command(flatten)]
        puzzle: PuzzleArgs,
    },
}

/// Puzzle shape shared by the game commands
#[derive(clap::Args, Clone, Copy)]
struct PuzzleArgs {
    /// Length of the hidden word
    #[arg(short, long, default_value_t = DEFAULT_GAME_LENGTH)]
    length: usize,

    /// Shortest sub-word to find
    #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,
}

impl Default for PuzzleArgs {
    fn default() -> Self {
        Self {
            length: DEFAULT_GAME_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig::from_verbosity(cli.verbose))?;

    let source = DictionarySource::from_arg(&cli.dictionary);
    let dictionary = source
        .load()
        .with_context(|| format!("loading dictionary '{}'", cli.dictionary))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        puzzle: PuzzleArgs::default(),
    });

    match command {
        Commands::Play { puzzle } => run_play_command(&dictionary, puzzle),
        Commands::Simple { puzzle } => run_simple(
            &GameEngine::new(&dictionary),
            puzzle.length,
            puzzle.min_length,
        )
        .map_err(|e| anyhow::anyhow!(e)),
        Commands::New { puzzle, json } => run_new_command(&dictionary, puzzle, json),
        Commands::Scramble { word } => {
            print_scramble_result(&scramble_word(&word)?);
            Ok(())
        }
        Commands::Palindromes => {
            print_word_list(&palindrome_words(&dictionary));
            Ok(())
        }
        Commands::Exists { word } => {
            print_exists_result(&word_exists(&dictionary, &word));
            Ok(())
        }
        Commands::Prefix { prefix } => {
            print_word_list(&prefix_words(&dictionary, &prefix)?);
            Ok(())
        }
        Commands::Suffix { suffix } => {
            print_word_list(&suffix_words(&dictionary, &suffix)?);
            Ok(())
        }
        Commands::Search { start, end, length } => {
            let criteria = SearchCriteria::new(start, end, length);
            print_word_list(&search_words(&dictionary, criteria)?);
            Ok(())
        }
        Commands::Subwords { word, min_length } => {
            print_word_list(&sub_words(&dictionary, &word, min_length));
            Ok(())
        }
        Commands::Benchmark { count, puzzle } => {
            run_benchmark_command(&dictionary, count, puzzle)
        }
    }
}

fn run_new_command(dictionary: &DictionaryIndex, puzzle: PuzzleArgs, json: bool) -> Result<()> {
    let engine = GameEngine::new(dictionary);
    let snapshot = new_game(&engine, puzzle.length, puzzle.min_length)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_game_snapshot(&snapshot);
    }
    Ok(())
}

fn run_benchmark_command(
    dictionary: &DictionaryIndex,
    count: usize,
    puzzle: PuzzleArgs,
) -> Result<()> {
    println!(
        "Creating {count} puzzles from {}-letter words...",
        puzzle.length
    );

    let engine = GameEngine::new(dictionary);
    let result = run_benchmark(&engine, count, puzzle.length, puzzle.min_length, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &DictionaryIndex, puzzle: PuzzleArgs) -> Result<()> {
    use word_jumble::interactive::{App, run_tui};

    let app = App::new(
        GameEngine::new(dictionary),
        puzzle.length,
        puzzle.min_length,
    );
    run_tui(app)
}
