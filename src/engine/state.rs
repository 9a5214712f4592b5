//! Puzzle state machine
//!
//! A [`GameState`] holds one puzzle: the chosen word, its scramble and the
//! fixed set of sub-words to find. The only mutation is [`GameState::submit_guess`],
//! which flips a sub-word from unguessed to guessed. Counts are always derived
//! from the map, never stored.

use super::scramble::scramble;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Attempts made by [`GameState::reshuffle`] to find a new arrangement
const RESHUFFLE_ATTEMPTS: usize = 10;

/// Whether a puzzle still has words to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Active,
    Completed,
}

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuessOutcome {
    /// A new sub-word was found and more remain
    CorrectMore,
    /// A new sub-word was found and it was the last one
    CorrectAllDone,
    /// Unknown, already guessed, or blank
    Incorrect,
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        !matches!(self, Self::Incorrect)
    }

    /// Player-facing summary of the outcome
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::CorrectMore => "Guessed correctly.",
            Self::CorrectAllDone => "All words guessed.",
            Self::Incorrect => "Guessed incorrectly.",
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Point-in-time view of a puzzle, shaped for serialization by callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub original_word: String,
    pub scramble_word: String,
    pub total_words: usize,
    pub remaining_words: usize,
    pub guessed_words: Vec<String>,
}

/// Outcome of [`GameState::submit_guess`] with the post-guess snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameGuessResult {
    pub outcome: GuessOutcome,
    pub guess_word: String,
    #[serde(flatten)]
    pub snapshot: GameSnapshot,
}

/// One active puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    original: String,
    scramble: String,
    sub_words: BTreeMap<String, bool>,
}

impl GameState {
    /// Assemble a puzzle from parts; every sub-word starts unguessed
    ///
    /// New puzzles come from [`super::GameEngine::create_game`], which picks
    /// the word and derives the sub-words. Call this directly only to rebuild
    /// a puzzle whose word, scramble and sub-words were saved elsewhere; the
    /// sub-words are taken as given and not checked against the dictionary.
    pub fn new<I>(original: impl Into<String>, scramble: impl Into<String>, sub_words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            original: original.into(),
            scramble: scramble.into(),
            sub_words: sub_words.into_iter().map(|w| (w, false)).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    #[must_use]
    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    /// Every sub-word with its guessed flag, in lexicographic order
    pub fn sub_words(&self) -> impl Iterator<Item = (&str, bool)> {
        self.sub_words.iter().map(|(w, &g)| (w.as_str(), g))
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.sub_words.len()
    }

    /// Sub-words not yet guessed
    #[must_use]
    pub fn remaining_words(&self) -> usize {
        self.sub_words.values().filter(|&&guessed| !guessed).count()
    }

    /// Sub-words already guessed, in lexicographic order
    #[must_use]
    pub fn guessed_words(&self) -> Vec<&str> {
        self.sub_words
            .iter()
            .filter(|&(_, &guessed)| guessed)
            .map(|(w, _)| w.as_str())
            .collect()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.remaining_words() == 0 {
            GameStatus::Completed
        } else {
            GameStatus::Active
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status() == GameStatus::Completed
    }

    /// Submit a guess
    ///
    /// The guess is trimmed and matched case-sensitively against the sub-words.
    /// Only an unguessed sub-word counts; anything else, including a repeat or
    /// a blank guess, is [`GuessOutcome::Incorrect`] and leaves the state as is.
    ///
    /// # Examples
    /// ```
    /// use word_jumble::engine::{GameState, GuessOutcome};
    ///
    /// let mut game = GameState::new("gloomy", "molgoy", ["glom".to_string(), "moo".to_string()]);
    /// assert_eq!(game.submit_guess("moo").outcome, GuessOutcome::CorrectMore);
    /// assert_eq!(game.submit_guess("moo").outcome, GuessOutcome::Incorrect);
    /// assert_eq!(game.submit_guess("glom").outcome, GuessOutcome::CorrectAllDone);
    /// ```
    pub fn submit_guess(&mut self, guess: &str) -> GameGuessResult {
        let word = guess.trim();

        let outcome = match self.sub_words.get_mut(word) {
            Some(guessed) if !*guessed => {
                *guessed = true;
                if self.remaining_words() == 0 {
                    GuessOutcome::CorrectAllDone
                } else {
                    GuessOutcome::CorrectMore
                }
            }
            _ => GuessOutcome::Incorrect,
        };

        tracing::debug!(
            guess = word,
            ?outcome,
            remaining = self.remaining_words(),
            "guess submitted"
        );

        GameGuessResult {
            outcome,
            guess_word: word.to_string(),
            snapshot: self.snapshot(),
        }
    }

    /// Re-scramble the original word, trying to change the current arrangement
    ///
    /// Gives up after a few attempts, which only matters for words with very
    /// few arrangements. Sub-words are untouched.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..RESHUFFLE_ATTEMPTS {
            let Ok(next) = scramble(&self.original, rng) else {
                return;
            };
            let changed = next != self.scramble;
            self.scramble = next;
            if changed {
                return;
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            original_word: self.original.clone(),
            scramble_word: self.scramble.clone(),
            total_words: self.total_words(),
            remaining_words: self.remaining_words(),
            guessed_words: self.guessed_words().into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn gloomy() -> GameState {
        let words = ["goo", "gym", "log", "loo", "moo", "glom", "logo", "loom", "gloom"];
        GameState::new("gloomy", "gomlyo", words.iter().map(|w| (*w).to_string()))
    }

    #[test]
    fn new_game_is_untouched() {
        let game = gloomy();
        assert_eq!(game.total_words(), 9);
        assert_eq!(game.remaining_words(), 9);
        assert!(game.guessed_words().is_empty());
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn sub_words_sorted() {
        let game = gloomy();
        let words: Vec<&str> = game.sub_words().map(|(w, _)| w).collect();
        assert_eq!(
            words,
            vec!["glom", "gloom", "goo", "gym", "log", "logo", "loo", "loom", "moo"]
        );
    }

    #[test]
    fn correct_guess_decrements_remaining() {
        let mut game = gloomy();
        let result = game.submit_guess("loom");
        assert_eq!(result.outcome, GuessOutcome::CorrectMore);
        assert_eq!(result.guess_word, "loom");
        assert_eq!(result.snapshot.remaining_words, 8);
        assert_eq!(result.snapshot.total_words, 9);
        assert_eq!(result.snapshot.guessed_words, vec!["loom"]);
        assert_eq!(game.remaining_words(), 8);
    }

    #[test]
    fn repeat_guess_is_incorrect_and_idempotent() {
        let mut game = gloomy();
        game.submit_guess("loom");
        let result = game.submit_guess("loom");
        assert_eq!(result.outcome, GuessOutcome::Incorrect);
        assert_eq!(result.snapshot.remaining_words, 8);
        assert_eq!(game.guessed_words(), vec!["loom"]);
    }

    #[test]
    fn unknown_guess_is_incorrect() {
        let mut game = gloomy();
        let before = game.clone();
        let result = game.submit_guess("answer");
        assert_eq!(result.outcome, GuessOutcome::Incorrect);
        assert_eq!(game, before);
    }

    #[test]
    fn blank_guess_is_incorrect() {
        let mut game = gloomy();
        for guess in ["", "   ", "\t"] {
            let result = game.submit_guess(guess);
            assert_eq!(result.outcome, GuessOutcome::Incorrect);
            assert_eq!(result.guess_word, "");
        }
        assert_eq!(game.remaining_words(), 9);
    }

    #[test]
    fn guess_is_trimmed_but_case_sensitive() {
        let mut game = gloomy();
        assert_eq!(game.submit_guess("  goo ").outcome, GuessOutcome::CorrectMore);
        assert_eq!(game.submit_guess("LOG").outcome, GuessOutcome::Incorrect);
    }

    #[test]
    fn guessing_everything_completes() {
        let mut game = gloomy();
        let words: Vec<String> = game.sub_words().map(|(w, _)| w.to_string()).collect();
        let (last, rest) = words.split_last().unwrap();

        for word in rest {
            assert_eq!(game.submit_guess(word).outcome, GuessOutcome::CorrectMore);
        }
        let result = game.submit_guess(last);
        assert_eq!(result.outcome, GuessOutcome::CorrectAllDone);
        assert_eq!(result.snapshot.remaining_words, 0);
        assert_eq!(game.status(), GameStatus::Completed);

        // Still evaluable afterwards, and never correct again
        assert_eq!(game.submit_guess(last).outcome, GuessOutcome::Incorrect);
        assert_eq!(game.submit_guess("gym").outcome, GuessOutcome::Incorrect);
        assert!(game.is_completed());
    }

    #[test]
    fn empty_puzzle_starts_completed() {
        let game = GameState::new("xyzzy", "zyxzy", Vec::new());
        assert_eq!(game.status(), GameStatus::Completed);
        assert_eq!(game.total_words(), 0);
    }

    #[test]
    fn reshuffle_changes_scramble_only() {
        let mut game = gloomy();
        let before_words: Vec<(String, bool)> =
            game.sub_words().map(|(w, g)| (w.to_string(), g)).collect();
        let old = game.scramble().to_string();

        game.reshuffle(&mut StdRng::seed_from_u64(9));

        assert_ne!(game.scramble(), old);
        assert_ne!(game.scramble(), game.original());
        let after_words: Vec<(String, bool)> =
            game.sub_words().map(|(w, g)| (w.to_string(), g)).collect();
        assert_eq!(before_words, after_words);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(GuessOutcome::CorrectMore.to_string(), "Guessed correctly.");
        assert_eq!(GuessOutcome::CorrectAllDone.message(), "All words guessed.");
        assert_eq!(GuessOutcome::Incorrect.message(), "Guessed incorrectly.");
        assert!(GuessOutcome::CorrectAllDone.is_correct());
        assert!(!GuessOutcome::Incorrect.is_correct());
    }

    #[test]
    fn guess_result_serializes_flat() {
        let mut game = gloomy();
        let result = game.submit_guess("moo");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["outcome"], "CorrectMore");
        assert_eq!(json["guess_word"], "moo");
        assert_eq!(json["original_word"], "gloomy");
        assert_eq!(json["remaining_words"], 8);
        assert_eq!(json["guessed_words"][0], "moo");
    }
}
