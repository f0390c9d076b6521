//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_game_summary, print_openers, print_ranked, print_solve_result,
    print_turn_report,
};
