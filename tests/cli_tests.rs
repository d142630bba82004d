mod common;
use common::{rbs, setup_data_dir};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_stats_chicago_march() {
    let dir = setup_data_dir("cli_stats_march");
    let dir = dir.to_string_lossy().to_string();

    rbs()
        .args(["--data-dir", &dir, "stats", "--city", "Chicago", "--month", "March"])
        .assert()
        .success()
        .stdout(contains("4 of 7 trips selected"))
        .stdout(contains("Most Frequent Day: Monday"))
        .stdout(contains("Most Common Trip Route: Canal St to Clark St"))
        .stdout(contains("Gender Count:"));
}

#[test]
fn test_stats_with_raw_pages() {
    let dir = setup_data_dir("cli_stats_raw");
    let dir = dir.to_string_lossy().to_string();

    rbs()
        .args(["--data-dir", &dir, "stats", "-c", "washington", "--raw", "5"])
        .assert()
        .success()
        .stdout(contains("Station 2"))
        .stdout(contains("No more data available."))
        .stdout(contains("Birth Year").not());
}

#[test]
fn test_stats_rejects_unknown_city() {
    rbs()
        .args(["stats", "--city", "boston"])
        .assert()
        .failure()
        .stderr(contains("expected one of"));
}

#[test]
fn test_stats_missing_file_fails() {
    let dir = setup_data_dir("cli_stats_missing");
    let dir = dir.to_string_lossy().to_string();

    rbs()
        .args(["--data-dir", &dir, "stats", "--city", "new york city"])
        .assert()
        .failure()
        .stderr(contains("Data file not found"));
}

#[test]
fn test_explore_reads_stdin() {
    let dir = setup_data_dir("cli_explore");
    let dir = dir.to_string_lossy().to_string();

    rbs()
        .args(["--data-dir", &dir])
        .write_stdin("washington\nlondon\napril\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Invalid input. Please try again."))
        .stdout(contains("Most Frequent Month: April"));
}

#[test]
fn test_explore_subcommand() {
    let dir = setup_data_dir("cli_explore_sub");
    let dir = dir.to_string_lossy().to_string();

    rbs()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("washington\nall\nsaturday\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Most Frequent Day: Saturday"));
}

#[test]
fn test_config_print_and_check() {
    let dir = setup_data_dir("cli_config");
    let dir = dir.to_string_lossy().to_string();

    rbs()
        .args(["--data-dir", &dir, "config", "--print", "--check"])
        .assert()
        .success()
        .stdout(contains("raw_page_size"))
        .stdout(contains("chicago.csv"))
        .stdout(contains("missing"));
}

#[test]
fn test_init_test_mode() {
    rbs()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("rbikeshare.conf"))
        .stdout(contains("Test mode"));
}
