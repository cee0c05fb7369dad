mod common;

use predicates::str::contains;

#[test]
fn zero_max_count_is_invalid() {
    assert_cmd::cargo::cargo_bin_cmd!("filler-text")
        .args(["--max-count", "0", "--no-clipboard", "3"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn max_count_above_limit_is_invalid() {
    assert_cmd::cargo::cargo_bin_cmd!("filler-text")
        .args(["--max-count", "18446744073709551615", "--no-clipboard", "1e30"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("--max-count"));
}

#[test]
fn interactive_conflicts_with_output() {
    assert_cmd::cargo::cargo_bin_cmd!("filler-text")
        .args(["--interactive", "--output", "page.html", "--no-clipboard"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_format_is_invalid() {
    assert_cmd::cargo::cargo_bin_cmd!("filler-text")
        .args(["--format", "pdf", "--no-clipboard"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_corpus_file_errors() {
    let dir = common::corpus_fs();

    assert_cmd::cargo::cargo_bin_cmd!("filler-text")
        .current_dir(&dir)
        .args(["--corpus", "nope.txt", "--no-clipboard", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("nope.txt"));
}

#[test]
fn empty_corpus_file_errors() {
    let dir = common::corpus_fs();

    assert_cmd::cargo::cargo_bin_cmd!("filler-text")
        .current_dir(&dir)
        .args(["--corpus", "empty.txt", "--no-clipboard", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("corpus contains no paragraphs"));
}
