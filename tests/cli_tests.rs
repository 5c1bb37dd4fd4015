//! End-to-end tests of the validate-fasta binary
//!
//! Each test writes a FASTA file to a temporary directory, runs the binary
//! against it and checks exit status, output files and the printed tally.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MIXED_FASTA: &str = ">sp|P12345|NAME_HUMAN desc\nMSEQ\n>bad header\nMORE\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn input(&self, content: &str) -> PathBuf {
        let path = self.path("input.fasta");
        fs::write(&path, content).expect("Failed to write input");
        path
    }

    fn command(&self, input: &Path) -> Command {
        let mut cmd = Command::cargo_bin("validate-fasta").expect("binary should build");
        cmd.arg(input)
            .arg(self.path("good.fasta"))
            .arg(self.path("bad.fasta"));
        cmd
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Failed to read output")
    }
}

#[test]
fn test_splits_good_and_bad_entries() {
    let fixture = Fixture::new();
    let input = fixture.input(MIXED_FASTA);

    fixture
        .command(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Database Types"))
        .stdout(predicate::str::contains("UniProt: 1"));

    assert_eq!(fixture.read("good.fasta"), ">sp|P12345|NAME_HUMAN desc\nMSEQ\n");
    assert_eq!(fixture.read("bad.fasta"), ">bad header\nMORE\n");
}

#[test]
fn test_explicit_false_crash_flag_tolerates_bad_headers() {
    let fixture = Fixture::new();
    let input = fixture.input(MIXED_FASTA);

    fixture.command(&input).arg("false").assert().success();
    assert_eq!(fixture.read("bad.fasta"), ">bad header\nMORE\n");
}

#[test]
fn test_crash_flag_exits_with_status_one() {
    let fixture = Fixture::new();
    let input = fixture.input(">bad header\nMORE\n>sp|P12345|NAME_HUMAN\nMSEQ\n");

    fixture
        .command(&input)
        .arg("true")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid FASTA headers detected"));

    assert!(!fixture.path("good.fasta").exists());
    assert!(!fixture.path("bad.fasta").exists());
}

#[test]
fn test_crash_flag_with_only_valid_headers_succeeds() {
    let fixture = Fixture::new();
    let input = fixture.input(">sp|P12345|NAME_HUMAN\nMSEQ\n>ENSP00000354587.3 pep\nMK\n");

    fixture
        .command(&input)
        .arg("true")
        .assert()
        .success()
        .stdout(predicate::str::contains("UniProt: 1"))
        .stdout(predicate::str::contains("Ensembl: 1"));

    assert_eq!(fixture.read("bad.fasta"), "");
}

#[test]
fn test_empty_input_gives_empty_outputs() {
    let fixture = Fixture::new();
    let input = fixture.input("");

    fixture.command(&input).arg("true").assert().success();

    assert_eq!(fixture.read("good.fasta"), "");
    assert_eq!(fixture.read("bad.fasta"), "");
}

#[test]
fn test_input_without_headers_is_not_an_error() {
    let fixture = Fixture::new();
    let input = fixture.input("MSEQ\nMORE\n");

    fixture.command(&input).arg("true").assert().success();

    assert_eq!(fixture.read("good.fasta"), "");
    assert_eq!(fixture.read("bad.fasta"), "");
}

#[test]
fn test_missing_input_is_logged_and_outputs_are_empty() {
    let fixture = Fixture::new();
    let input = fixture.path("does_not_exist.fasta");

    fixture
        .command(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("FASTA file not found"));

    assert_eq!(fixture.read("good.fasta"), "");
    assert_eq!(fixture.read("bad.fasta"), "");
}

#[test]
fn test_undecodable_input_is_reported_as_read_failure() {
    let fixture = Fixture::new();
    let input = fixture.path("input.fasta");
    fs::write(&input, b">sp|P12345|NAME_HUMAN caf\xe9\nMSEQ\n").expect("Failed to write input");

    fixture
        .command(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to read FASTA input"))
        .stderr(predicate::str::contains("FASTA file not found").not());

    assert_eq!(fixture.read("good.fasta"), "");
    assert_eq!(fixture.read("bad.fasta"), "");
}

#[test]
fn test_upper_case_crash_flag_is_accepted() {
    let fixture = Fixture::new();
    let input = fixture.input(MIXED_FASTA);

    fixture
        .command(&input)
        .arg("TRUE")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid FASTA headers detected"));
}

#[test]
fn test_unwritable_output_exits_with_status_one() {
    let fixture = Fixture::new();
    let input = fixture.input(MIXED_FASTA);

    Command::cargo_bin("validate-fasta")
        .expect("binary should build")
        .arg(&input)
        .arg(fixture.path("good.fasta"))
        .arg(fixture.path("no_such_dir").join("bad.fasta"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create"));
}

#[test]
fn test_stdin_input() {
    let fixture = Fixture::new();

    fixture
        .command(Path::new("-"))
        .write_stdin(MIXED_FASTA)
        .assert()
        .success();

    assert_eq!(fixture.read("good.fasta"), ">sp|P12345|NAME_HUMAN desc\nMSEQ\n");
}

#[test]
fn test_json_report() {
    let fixture = Fixture::new();
    let input = fixture.input(MIXED_FASTA);

    let output = fixture
        .command(&input)
        .args(["--format", "json"])
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["records"], 2);
    assert_eq!(report["good"], 1);
    assert_eq!(report["bad"], 1);
    assert_eq!(report["database_types"]["UniProt"], 1);
}

#[test]
fn test_tsv_report() {
    let fixture = Fixture::new();
    let input = fixture.input(">gi|4501847|ref|NP_001605.1| acid phosphatase\nMK\n");

    fixture
        .command(&input)
        .args(["--format", "tsv"])
        .assert()
        .success()
        .stdout("database_type\tcount\nNCBI\t1\n");
}

#[test]
fn test_verbose_summary_goes_to_stderr() {
    let fixture = Fixture::new();
    let input = fixture.input(MIXED_FASTA);

    fixture
        .command(&input)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Parsed 2 records (1 well-formed, 1 malformed)",
        ))
        .stdout(predicate::str::contains("Parsed").not());
}
