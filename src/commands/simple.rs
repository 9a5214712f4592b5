//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Puzzles live in a [`GameStore`], so
//! several can be open at once and switched between by id.

use crate::engine::{GameEngine, GameGuessResult, GuessOutcome};
use crate::output::formatters::masked_words;
use crate::store::{GameId, GameStore};
use colored::Colorize;
use std::io::{self, Write};

/// A line of player input
///
/// Commands start with `:` so that no word, including "new" or "exit", is
/// ever mistaken for one.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Shuffle,
    Games,
    Help,
    Switch(String),
    Guess(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        let input = input.trim();
        let Some(command) = input.strip_prefix(':') else {
            return Self::Guess(input.to_string());
        };

        let (name, arg) = command
            .trim()
            .split_once(char::is_whitespace)
            .map_or((command.trim(), ""), |(name, arg)| (name, arg.trim()));
        match name.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "shuffle" | "s" => Self::Shuffle,
            "games" | "g" => Self::Games,
            "switch" if !arg.is_empty() => Self::Switch(arg.to_string()),
            _ => Self::Help,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a
/// puzzle of the requested length cannot be created.
pub fn run_simple(engine: &GameEngine<'_>, length: usize, min_length: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Jumble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble the letters and find every word hidden in them.");
    print_help();

    let mut store = GameStore::new();
    let mut current = start_game(&mut store, engine, length, min_length)?;

    loop {
        let input = get_user_input("Guess")?;

        match Command::parse(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                current = start_game(&mut store, engine, length, min_length)?;
            }
            Command::Shuffle => {
                if let Some(scramble) = store.reshuffle(&current, &mut rand::rng()) {
                    println!("🔀 {}\n", scramble.to_uppercase().bright_yellow().bold());
                }
            }
            Command::Games => print_games(&store, current),
            Command::Help => print_help(),
            Command::Switch(prefix) => match store.find_id(&prefix) {
                Some(id) => {
                    current = id;
                    print_board(&store, current);
                }
                None => println!("❌ No single game matches '{prefix}'\n"),
            },
            Command::Guess(word) => {
                if word.chars().count() < min_length {
                    println!("Enter a word (min {min_length} letters).\n");
                    continue;
                }
                let Some(result) = store.guess(&current, &word) else {
                    return Err("Game board/state not found".to_string());
                };
                print_guess(&result);

                if result.outcome == GuessOutcome::CorrectAllDone {
                    print_celebration(&result);
                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            current = start_game(&mut store, engine, length, min_length)?;
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

fn start_game(
    store: &mut GameStore,
    engine: &GameEngine<'_>,
    length: usize,
    min_length: usize,
) -> Result<GameId, String> {
    let id = store
        .create(engine, length, min_length)
        .map_err(|e| e.to_string())?;
    println!("\n🔄 New game {}", short_id(id).bright_black());
    print_board(store, id);
    Ok(id)
}

fn short_id(id: GameId) -> String {
    id.to_string().chars().take(8).collect()
}

fn print_board(store: &GameStore, id: GameId) {
    let Some(state) = store.get(&id) else {
        return;
    };
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Letters: {}   ({} of {} words left)",
        state.scramble().to_uppercase().bright_yellow().bold(),
        state.remaining_words(),
        state.total_words()
    );
    println!("────────────────────────────────────────────────────────────");
    for line in masked_words(state.sub_words()) {
        println!("  {line}");
    }
    println!();
}

fn print_guess(result: &GameGuessResult) {
    let line = format!(
        "Result for \"{}\" => {} ({} remaining)",
        result.guess_word, result.outcome, result.snapshot.remaining_words
    );
    if result.outcome.is_correct() {
        println!("✅ {}\n", line.green());
    } else {
        println!("❌ {}\n", line.red());
    }
}

fn print_celebration(result: &GameGuessResult) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉 🎊 ✨  A L L   W O R D S   F O U N D !  ✨ 🎊 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  The word was {}",
        result.snapshot.original_word.to_uppercase().bright_white().bold()
    );
    println!(
        "  You found all {} words: {}\n",
        result.snapshot.total_words.to_string().bright_cyan().bold(),
        result.snapshot.guessed_words.join(", ")
    );
}

fn print_games(store: &GameStore, current: GameId) {
    println!("\nOpen games:");
    for (id, state) in store.list() {
        let marker = if id == current { "▶" } else { " " };
        println!(
            "  {marker} {}  {}  {}/{} left",
            short_id(id).bright_black(),
            state.scramble().to_uppercase(),
            state.remaining_words(),
            state.total_words()
        );
    }
    println!();
}

fn print_help() {
    println!("Type a word to guess it. Commands:");
    println!("  :shuffle (:s)    re-scramble the letters");
    println!("  :new (:n)        start another game");
    println!("  :games (:g)      list open games");
    println!("  :switch <id>     continue another game by id prefix");
    println!("  :quit (:q)       exit\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // EOF behaves like quit
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DictionaryIndex;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(" :NEW "), Command::New);
        assert_eq!(Command::parse(":s"), Command::Shuffle);
        assert_eq!(Command::parse(":games"), Command::Games);
        assert_eq!(Command::parse(":help"), Command::Help);
        assert_eq!(Command::parse(":bogus"), Command::Help);
    }

    #[test]
    fn parses_switch() {
        assert_eq!(
            Command::parse(":switch 1a2b"),
            Command::Switch("1a2b".to_string())
        );
        assert_eq!(Command::parse(":switch"), Command::Help);
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(Command::parse("Rank"), Command::Guess("Rank".to_string()));
        assert_eq!(Command::parse(""), Command::Guess(String::new()));
    }

    #[test]
    fn command_names_are_guesses_without_colon() {
        for word in ["new", "help", "exit", "quit", "games", "shuffle", "q", "n"] {
            assert_eq!(Command::parse(word), Command::Guess(word.to_string()));
        }
    }

    #[test]
    fn sub_words_named_like_commands_can_be_guessed() {
        let dict = DictionaryIndex::from_lines(["nephew", "new", "hen", "hew", "pew"]);
        let engine = GameEngine::new(&dict);
        let mut store = GameStore::new();
        let id = store.create(&engine, 6, 3).unwrap();

        let total = store.get(&id).unwrap().total_words();
        let mut last = None;
        for word in ["new", "hen", "hew", "pew", "nephew"] {
            let Command::Guess(guess) = Command::parse(word) else {
                panic!("{word} parsed as a command");
            };
            last = store.guess(&id, &guess).map(|r| r.outcome);
        }

        assert_eq!(total, 5);
        assert_eq!(last, Some(GuessOutcome::CorrectAllDone));
        assert!(store.get(&id).unwrap().is_completed());
    }
}
