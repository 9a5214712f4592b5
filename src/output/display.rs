//! Display functions for command results

use super::formatters::{columns, create_progress_bar};
use crate::commands::{BenchmarkResult, ExistsResult, ScrambleResult, WordListResult};
use crate::engine::GameSnapshot;
use colored::Colorize;

/// Print a titled word list in columns
pub fn print_word_list(result: &WordListResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        result.title.bright_cyan().bold(),
        format!("({} found)", result.words.len()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("{}", "  (none)".bright_black());
        return;
    }
    for row in columns(&result.words, 6) {
        println!("  {row}");
    }
}

pub fn print_scramble_result(result: &ScrambleResult) {
    println!(
        "{} → {}",
        result.word.bright_white(),
        result.scramble.bright_yellow().bold()
    );
}

pub fn print_exists_result(result: &ExistsResult) {
    if result.exists {
        println!("✅ '{}' {}", result.word, "is in the dictionary".green());
    } else {
        println!("❌ '{}' {}", result.word, "is not in the dictionary".red());
    }
}

/// Print the opening state of a new puzzle
pub fn print_game_snapshot(snapshot: &GameSnapshot) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "NEW GAME".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n   Letters:    {}",
        snapshot.scramble_word.to_uppercase().bright_yellow().bold()
    );
    println!("   Answer:     {}", snapshot.original_word.bright_black());
    println!("   Words:      {}", snapshot.total_words);
    println!("   Remaining:  {}", snapshot.remaining_words);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Puzzles:".bright_cyan().bold());
    println!("   Games created:    {}", result.total_games);
    println!(
        "   Word length:      {} (sub-words ≥ {})",
        result.length, result.min_length
    );
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_sub_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_sub_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_sub_words).green()
    );
    println!("   Empty puzzles:    {}", result.empty_games);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Sub-words per puzzle:".bright_cyan().bold());
    for (&words, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {words:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
