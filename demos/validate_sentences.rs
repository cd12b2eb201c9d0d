//! Validates a fixed list of sentences and prints one verdict per line.
//!
//! Run with `RUST_LOG=pullgen=debug` to see why sentences are rejected, or with `RUST_LOG=pullgen=trace` to also see every number that was pulled.

use pullgen::sentence::is_sentence_valid;
use tracing_subscriber::EnvFilter;

const SENTENCES: [&str; 11] = [
    "The quick brown fox said \"hello Mr lazy dog\".",
    "The quick brown fox said hello Mr lazy dog.",
    "One lazy dog is too few, 13 is too many.",
    "One lazy dog is too few, thirteen is too many.",
    "How many \"lazy dogs\" are there?",
    "The quick brown fox said \"hello Mr. lazy dog\".",
    "the quick brown fox said \"hello Mr lazy dog\"",
    "\"The quick brown fox said \"hello Mr lazy dog.\"",
    "One lazy dog is too few, 12 is too many.",
    "Are there 11, 12, or 13 lazy dogs?",
    "There is no punctuation in this sentence",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    for sentence in SENTENCES {
        println!(
            "{}",
            if is_sentence_valid(sentence) {
                "valid"
            } else {
                "INVALID"
            }
        );
    }
}
