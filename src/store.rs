//! In-memory puzzle repository keyed by game id
//!
//! Holds any number of puzzles under opaque ids so a front end can juggle
//! several games at once. Nothing is persisted. Mutation requires `&mut self`,
//! so each puzzle has exactly one writer at a time.

use crate::core::JumbleError;
use crate::engine::{GameEngine, GameGuessResult, GameState};
use rand::Rng;
use rustc_hash::FxHashMap;
use uuid::Uuid;

/// Opaque puzzle identifier
pub type GameId = Uuid;

#[derive(Debug, Default)]
pub struct GameStore {
    games: FxHashMap<GameId, GameState>,
}

impl GameStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a puzzle through `engine` and register it
    ///
    /// # Errors
    /// Propagates [`GameEngine::create_game`] errors; nothing is stored then.
    pub fn create(
        &mut self,
        engine: &GameEngine<'_>,
        length: usize,
        min_length: usize,
    ) -> Result<GameId, JumbleError> {
        let state = engine.create_game(length, min_length)?;
        Ok(self.insert(state))
    }

    /// Register an existing puzzle under a fresh id
    pub fn insert(&mut self, state: GameState) -> GameId {
        let id = Uuid::new_v4();
        tracing::debug!(%id, total = state.total_words(), "stored game");
        self.games.insert(id, state);
        id
    }

    #[must_use]
    pub fn get(&self, id: &GameId) -> Option<&GameState> {
        self.games.get(id)
    }

    /// Submit a guess to the puzzle `id`; `None` if no such puzzle
    pub fn guess(&mut self, id: &GameId, word: &str) -> Option<GameGuessResult> {
        self.games.get_mut(id).map(|state| state.submit_guess(word))
    }

    /// Re-scramble the puzzle `id`; returns the new scramble
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, id: &GameId, rng: &mut R) -> Option<&str> {
        let state = self.games.get_mut(id)?;
        state.reshuffle(rng);
        Some(state.scramble())
    }

    /// Drop the puzzle `id`, returning it if it existed
    pub fn remove(&mut self, id: &GameId) -> Option<GameState> {
        let removed = self.games.remove(id);
        if removed.is_some() {
            tracing::debug!(%id, "removed game");
        }
        removed
    }

    /// Resolve an id from its textual form or a unique prefix of it
    #[must_use]
    pub fn find_id(&self, text: &str) -> Option<GameId> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }
        if let Ok(id) = Uuid::parse_str(&text) {
            return self.games.contains_key(&id).then_some(id);
        }
        let mut matches = self.games.keys().filter(|id| id.to_string().starts_with(&text));
        match (matches.next(), matches.next()) {
            (Some(&id), None) => Some(id),
            _ => None,
        }
    }

    /// Ids with their puzzles, ordered by id
    #[must_use]
    pub fn list(&self) -> Vec<(GameId, &GameState)> {
        let mut games: Vec<(GameId, &GameState)> =
            self.games.iter().map(|(&id, state)| (id, state)).collect();
        games.sort_by_key(|(id, _)| *id);
        games
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DictionaryIndex;
    use crate::engine::GuessOutcome;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> DictionaryIndex {
        DictionaryIndex::from_lines(["titans", "tint", "tan", "ant", "sat", "tans", "saint"])
    }

    #[test]
    fn create_and_guess() {
        let dict = dictionary();
        let engine = GameEngine::new(&dict);
        let mut store = GameStore::new();

        let id = store.create(&engine, 6, 3).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().original(), "titans");

        let result = store.guess(&id, "tint").unwrap();
        assert_eq!(result.outcome, GuessOutcome::CorrectMore);
        assert_eq!(store.get(&id).unwrap().guessed_words(), vec!["tint"]);
    }

    #[test]
    fn unknown_id_is_none() {
        let mut store = GameStore::new();
        let id = Uuid::new_v4();
        assert!(store.guess(&id, "tint").is_none());
        assert!(store.get(&id).is_none());
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn failed_create_stores_nothing() {
        let dict = dictionary();
        let engine = GameEngine::new(&dict);
        let mut store = GameStore::new();
        assert!(store.create(&engine, 9, 3).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn games_are_independent() {
        let dict = dictionary();
        let engine = GameEngine::new(&dict);
        let mut store = GameStore::new();
        let first = store.create(&engine, 6, 3).unwrap();
        let second = store.create(&engine, 6, 3).unwrap();
        assert_ne!(first, second);

        store.guess(&first, "ant");
        assert_eq!(store.get(&first).unwrap().guessed_words(), vec!["ant"]);
        assert!(store.get(&second).unwrap().guessed_words().is_empty());
    }

    #[test]
    fn find_id_by_prefix() {
        let mut store = GameStore::new();
        let id = store.insert(GameState::new("titans", "nastit", Vec::new()));
        let text = id.to_string();

        assert_eq!(store.find_id(&text), Some(id));
        assert_eq!(store.find_id(&text[..8]), Some(id));
        assert_eq!(store.find_id(&text.to_uppercase()), Some(id));
        assert_eq!(store.find_id(""), None);
        assert_eq!(store.find_id("not-an-id"), None);
    }

    #[test]
    fn reshuffle_and_remove() {
        let mut store = GameStore::new();
        let id = store.insert(GameState::new("titans", "nastit", Vec::new()));

        let scramble = store
            .reshuffle(&id, &mut StdRng::seed_from_u64(8))
            .unwrap()
            .to_string();
        assert_ne!(scramble, "titans");

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.scramble(), scramble);
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_sorted() {
        let mut store = GameStore::new();
        for _ in 0..5 {
            store.insert(GameState::new("titans", "nastit", Vec::new()));
        }
        let ids: Vec<GameId> = store.list().into_iter().map(|(id, _)| id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
