//! Build script to embed the default dictionary
//!
//! Turns `data/words.txt` into a `WORDS` constant. Entries are kept verbatim
//! and escaped as string literals; blank lines are dropped.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_FILE: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={WORD_FILE}");

    let content =
        fs::read_to_string(WORD_FILE).unwrap_or_else(|e| panic!("Failed to read {WORD_FILE}: {e}"));
    let words: Vec<&str> = content.lines().filter(|line| !line.is_empty()).collect();

    let mut source = format!(
        "/// Default word ladder dictionary ({} words)\npub const WORDS: &[&str] = &[\n",
        words.len()
    );
    for word in &words {
        let _ = writeln!(source, "    {word:?},");
    }
    let _ = writeln!(source, "];\n\n/// Number of entries in `WORDS`");
    let _ = writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len());

    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR not set: {e}"));
    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
