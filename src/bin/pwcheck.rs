//! Demo driver: check a fixed set of passwords against a word-list file.
//!
//! Usage: `pwcheck [WORDLIST]` (default `wordlist.10000`). Prints, per
//! password, the strength verdict and the comparison count of the verbatim
//! query against each of the four tables. "Old" is the sampled hash,
//! "New" the full-scan hash.

use dict_tables::{wordlist, DictError, StrengthChecker};
use std::env;
use std::process;

const DEMO_PASSWORDS: [&str; 5] = [
    "account8",
    "accountability",
    "9a$D#qW7!uX&Lv3zT",
    "B@k45*W!c$Y7#zR9P",
    "X$8vQ!mW#3Dz&Yr4K5",
];

fn run() -> Result<(), DictError> {
    let path = env::args().nth(1).unwrap_or_else(|| "wordlist.10000".to_string());
    let words = wordlist::read_words_from_path(&path)?;

    let mut checker = StrengthChecker::new();
    checker.load(&words)?;

    for password in DEMO_PASSWORDS {
        let report = checker.check(password);
        println!("Testing password: {password}");
        println!("Strong: {}", report.strong);
        println!("Comparisons (Chaining, Old): {}", report.chaining_sampled.comparisons);
        println!("Comparisons (Chaining, New): {}", report.chaining_full.comparisons);
        println!("Comparisons (Probing, Old): {}", report.probing_sampled.comparisons);
        println!("Comparisons (Probing, New): {}", report.probing_full.comparisons);
        println!();
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("pwcheck: {e}");
        process::exit(1);
    }
}
