//! Build script to generate embedded word lists
//!
//! Reads the bundled data files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Guessable vocabulary
    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Bundled guessable vocabulary",
    );

    // Solution pool drawn from in self-play
    generate_word_list(
        "data/solutions.txt",
        &Path::new(&out_dir).join("solutions.rs"),
        "SOLUTIONS",
        "Bundled solution pool (subset of the vocabulary)",
    );

    generate_commonness_table(
        "data/commonness.txt",
        &Path::new(&out_dir).join("commonness.rs"),
    );

    println!("cargo:rerun-if-changed=data/words.txt");
    println!("cargo:rerun-if-changed=data/solutions.txt");
    println!("cargo:rerun-if-changed=data/commonness.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// {doc}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in `{const_name}`").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
}

fn generate_commonness_table(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// Bundled word commonness scores (word, score in [0, 1])").unwrap();
    writeln!(output, "pub const COMMONNESS: &[(&str, f64)] = &[").unwrap();
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let (Some(word), Some(score)) = (parts.next(), parts.next()) else {
            continue;
        };
        let score: f64 = score
            .parse()
            .unwrap_or_else(|e| panic!("Bad commonness score for {word}: {e}"));
        writeln!(output, "    (\"{}\", {score:?}),", word.to_ascii_lowercase()).unwrap();
    }
    writeln!(output, "];").unwrap();
}
