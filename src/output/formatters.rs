//! Formatting utilities for terminal output

use std::collections::BTreeMap;

/// Hide a word behind underscores, one per letter
#[must_use]
pub fn mask(word: &str) -> String {
    "_".repeat(word.chars().count())
}

/// Render a puzzle's sub-words grouped by length, unguessed ones masked
///
/// One line per length, shortest first, e.g. `3 │ ant ___ tan`.
#[must_use]
pub fn masked_words<'a>(sub_words: impl Iterator<Item = (&'a str, bool)>) -> Vec<String> {
    let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (word, guessed) in sub_words {
        let shown = if guessed { word.to_string() } else { mask(word) };
        by_length
            .entry(word.chars().count())
            .or_default()
            .push(shown);
    }

    by_length
        .into_iter()
        .map(|(length, words)| format!("{length} │ {}", words.join(" ")))
        .collect()
}

/// Lay words out in rows of `per_row`
#[must_use]
pub fn columns(words: &[String], per_row: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_counts_letters() {
        assert_eq!(mask("gloom"), "_____");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn masked_words_groups_by_length() {
        let words = [("ant", true), ("sat", false), ("tint", false), ("titans", true)];
        let lines = masked_words(words.into_iter());
        assert_eq!(lines, vec!["3 │ ant ___", "4 │ ____", "6 │ titans"]);
    }

    #[test]
    fn columns_pads_and_wraps() {
        let words: Vec<String> = ["a", "bee", "cd"].iter().map(|w| (*w).to_string()).collect();
        assert_eq!(columns(&words, 2), vec!["a    bee", "cd"]);
        assert!(columns(&[], 4).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
