#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};
use filler_text::Corpus;

pub const SMALL_CORPUS: [&str; 5] = [
    "First paragraph text",
    "Second paragraph text",
    "Third paragraph text",
    "Fourth paragraph text",
    "Fifth paragraph text",
];

pub fn small_corpus() -> Corpus {
    Corpus::new(SMALL_CORPUS).unwrap()
}

/// Builds a fixture tree:
/// root/
///   corpus.txt   (two paragraphs, the second spread over two lines)
///   markup.txt   (one paragraph containing markup)
///   empty.txt    (blank lines only)
pub fn corpus_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("corpus.txt")
        .write_str("only the first\n\nsecond one\nwraps here\n")
        .unwrap();
    td.child("markup.txt")
        .write_str("<strong>bold</strong> & friends\n")
        .unwrap();
    td.child("empty.txt").write_str("\n  \n\n").unwrap();
    td
}
