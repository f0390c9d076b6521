//! Command implementations

pub mod benchmark;
pub mod opener;
pub mod play;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, GameOutcome, run_benchmark};
pub use opener::best_openers;
pub use play::run_play;
pub use simple::run_simple;
pub use solve::{SolveResult, solve_word};

use std::io::{self, Write};

/// Prompt on stdout and read one trimmed line from stdin
///
/// End of input reads as `q` so the interactive loops exit cleanly.
fn read_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("q".to_string());
    }

    Ok(input.trim().to_string())
}
