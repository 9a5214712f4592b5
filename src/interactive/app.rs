//! TUI application state and logic
//!
//! The app keeps one puzzle board for the session, the same way a web
//! session would hold a single game.

use crate::engine::{GameEngine, GameGuessResult, GameState, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub engine: GameEngine<'a>,
    pub length: usize,
    pub min_length: usize,
    pub board: Option<GameState>,
    pub last_guess: Option<GameGuessResult>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_completed: usize,
    pub words_found: usize,
    pub wrong_guesses: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: GameEngine<'a>, length: usize, min_length: usize) -> Self {
        Self {
            engine,
            length,
            min_length,
            board: None,
            last_guess: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Find every word hidden in the scrambled letters.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        self.last_guess = None;

        match self.engine.create_game(self.length, self.min_length) {
            Ok(state) => {
                self.stats.total_games += 1;
                let total = state.total_words();
                self.input_mode = if state.is_completed() {
                    InputMode::Completed
                } else {
                    InputMode::Guessing
                };
                self.board = Some(state);
                self.add_message(
                    &format!("New game! {total} words to find."),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                self.board = None;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.trim().chars().count() < self.min_length {
            self.add_message(
                &format!("Enter a word (min {} letters).", self.min_length),
                MessageStyle::Error,
            );
            return;
        }

        let Some(board) = self.board.as_mut() else {
            self.add_message("No game in progress. Press Ctrl+N.", MessageStyle::Error);
            return;
        };
        let result = board.submit_guess(&guess);
        let text = format!("Result for \"{}\" => {}", result.guess_word, result.outcome);
        match result.outcome {
            GuessOutcome::CorrectMore => {
                self.stats.words_found += 1;
                self.add_message(&text, MessageStyle::Success);
            }
            GuessOutcome::CorrectAllDone => {
                self.stats.words_found += 1;
                self.stats.games_completed += 1;
                self.input_mode = InputMode::Completed;
                self.add_message(
                    &format!("🎉 All words found! The word was {}.", result.snapshot.original_word),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GuessOutcome::Incorrect => {
                self.stats.wrong_guesses += 1;
                self.add_message(&text, MessageStyle::Error);
            }
        }
        self.last_guess = Some(result);
    }

    pub fn reshuffle(&mut self) {
        if let Some(board) = self.board.as_mut() {
            board.reshuffle(&mut rand::rng());
            let scramble = board.scramble().to_uppercase();
            self.add_message(&format!("Shuffled: {scramble}"), MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn remaining_words(&self) -> usize {
        self.board.as_ref().map_or(0, GameState::remaining_words)
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.board.as_ref().map_or(0, GameState::total_words)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match app.input_mode {
                InputMode::Completed => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('n') if ctrl => app.new_game(),
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.reshuffle(),
                    KeyCode::Char(c) if c.is_alphabetic() => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_guess(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DictionaryIndex;

    fn dictionary() -> DictionaryIndex {
        DictionaryIndex::from_lines(["ranker", "rank", "ear", "err"])
    }

    #[test]
    fn new_game_sets_board() {
        let dict = dictionary();
        let mut app = App::new(GameEngine::new(&dict), 6, 3);
        app.new_game();

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.total_words(), 4);
        assert_eq!(app.remaining_words(), 4);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn new_game_failure_reports_error() {
        let dict = dictionary();
        let mut app = App::new(GameEngine::new(&dict), 9, 3);
        app.new_game();

        assert!(app.board.is_none());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn guesses_update_stats_and_mode() {
        let dict = dictionary();
        let mut app = App::new(GameEngine::new(&dict), 6, 3);
        app.new_game();

        for word in ["rank", "nope", "ear", "err"] {
            app.input_buffer = word.to_string();
            app.submit_guess();
        }
        assert_eq!(app.stats.words_found, 3);
        assert_eq!(app.stats.wrong_guesses, 1);
        assert_eq!(app.input_mode, InputMode::Guessing);

        app.input_buffer = "ranker".to_string();
        app.submit_guess();
        assert_eq!(app.remaining_words(), 0);
        assert_eq!(app.input_mode, InputMode::Completed);
        assert_eq!(app.stats.games_completed, 1);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn short_guess_is_not_submitted() {
        let dict = dictionary();
        let mut app = App::new(GameEngine::new(&dict), 6, 3);
        app.new_game();

        app.input_buffer = "ra".to_string();
        app.submit_guess();
        assert!(app.last_guess.is_none());
        assert_eq!(app.stats.wrong_guesses, 0);
    }

    #[test]
    fn reshuffle_keeps_progress() {
        let dict = dictionary();
        let mut app = App::new(GameEngine::new(&dict), 6, 3);
        app.new_game();
        app.input_buffer = "rank".to_string();
        app.submit_guess();

        app.reshuffle();
        assert_eq!(app.remaining_words(), 3);
        let mut letters: Vec<char> = app.board.as_ref().unwrap().scramble().chars().collect();
        letters.sort_unstable();
        assert_eq!(letters, vec!['a', 'e', 'k', 'n', 'r', 'r']);
    }
}
