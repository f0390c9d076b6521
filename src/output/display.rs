//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, guesses_word};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::engine::ScoredWord;
use crate::game::{GameState, GuessRecord};
use colored::Colorize;

fn print_information(record: &GuessRecord) {
    print!(
        "  Candidates: {} → {}  ({:.1}% eliminated",
        record.candidates_before,
        record.candidates_after,
        record.reduction_percentage()
    );
    match record.bits_of_information() {
        Some(bits) => println!(", {bits:.2} bits)"),
        None => println!(")"),
    }
}

/// Print one guess with its tiles and what it told us
pub fn print_turn_report(record: &GuessRecord) {
    println!(
        "\n  {}  {}",
        colored_guess(&record.word, &record.hints),
        record.hints.to_emoji()
    );
    print_information(record);
    println!();
}

/// Print the closing banner of a game
pub fn print_game_summary(history: &[GuessRecord], state: GameState) {
    let turns = history.len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match state {
        GameState::Won => println!(
            "{}",
            format!("    🎉  Solved in {turns} {}!", guesses_word(turns))
                .bright_green()
                .bold()
        ),
        GameState::Lost => println!(
            "{}",
            format!("    ❌  Out of turns after {turns} {}", guesses_word(turns))
                .red()
                .bold()
        ),
        GameState::Quit | GameState::InProgress => println!("    Game over"),
    }
    println!("{}", "═".repeat(60).bright_cyan());

    for (i, record) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.word.text().to_uppercase().bright_white().bold(),
            record.hints.to_emoji()
        );
    }
    println!();
}

/// Print up to `limit` ranked candidates with their scores
pub fn print_ranked(ranked: &[ScoredWord<'_>], limit: usize) {
    let Some(top) = ranked.first() else {
        return;
    };

    println!("\n  {} candidates:", ranked.len());
    for (i, scored) in ranked.iter().take(limit).enumerate() {
        println!(
            "  {:>4}. {}  {} {:.3}",
            i + 1,
            scored.word.text().to_uppercase(),
            create_progress_bar(scored.score, top.score, 20).green(),
            scored.score
        );
    }
    if ranked.len() > limit {
        println!("        … and {} more", ranked.len() - limit);
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, &step.hints),
            step.hints.to_emoji()
        );

        if verbose {
            print_information(step);
        }
    }

    println!();
    let turns = result.steps.len();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {turns} {}!", guesses_word(turns))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {turns} {}", guesses_word(turns))
                .red()
                .bold()
        );
    }
}

/// Print the best opening words
pub fn print_openers(openers: &[ScoredWord<'_>]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    print_ranked(openers, openers.len());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games());
    println!(
        "   Won:              {} {}",
        result.won,
        format!("({:.1}%)", result.win_rate()).green()
    );
    if result.lost > 0 {
        println!("   Lost:             {}", result.lost.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = count as f64 / result.total_games() as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    let hardest = result.hardest(5);
    if !hardest.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for outcome in hardest {
            println!(
                "   {} ({} {})",
                outcome.solution.to_uppercase().yellow(),
                outcome.num_guesses(),
                guesses_word(outcome.num_guesses())
            );
        }
    }
}
