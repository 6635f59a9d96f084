//! End-to-end tests running the `bullshit` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SAMPLE: &str = "\
%word
synergy
!paradigm
%suffix
-driven
%end
Q.E.D.
";

fn run(args: &[&str], env_file: Option<&Path>) -> Output {
	let mut command = Command::new(env!("CARGO_BIN_EXE_bullshit"));
	command.args(args).env_remove("RUST_LOG");
	match env_file {
		Some(path) => command.env("BULLSHIT_FILE", path),
		None => command.env_remove("BULLSHIT_FILE"),
	};
	command.output().unwrap()
}

fn sample_file(dir: &Path) -> std::path::PathBuf {
	let path = dir.join("words.txt");
	fs::write(&path, SAMPLE).unwrap();
	path
}

#[test]
fn prints_the_requested_number_of_phrases() {
	let dir = tempfile::tempdir().unwrap();
	let path = sample_file(dir.path());
	let output = run(&["--file", path.to_str().unwrap(), "3"], None);
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert_eq!(stdout.lines().count(), 3);
	for line in stdout.lines() {
		assert!(!line.split(' ').any(|token| token == "-driven"), "{line:?}");
	}
}

#[test]
fn env_variable_locates_the_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = sample_file(dir.path());
	let output = run(&["-n", "2"], Some(&path));
	assert!(output.status.success());
	assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);
}

#[test]
fn sort_prints_the_database() {
	let dir = tempfile::tempdir().unwrap();
	let path = sample_file(dir.path());
	let output = run(&["-s", "-f", path.to_str().unwrap()], None);
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8(output.stdout).unwrap(),
		"%end\nQ.E.D.\n\n%suffix\n-driven\n\n%word\nsynergy\n!paradigm\n"
	);
}

#[test]
fn seed_makes_output_reproducible() {
	let dir = tempfile::tempdir().unwrap();
	let path = sample_file(dir.path());
	let args = ["-f", path.to_str().unwrap(), "--seed", "7", "10"];
	assert_eq!(run(&args, None).stdout, run(&args, None).stdout);
}

#[test]
fn missing_file_fails_without_output() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("nope.txt");
	let output = run(&["--file", missing.to_str().unwrap()], None);
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.contains("unable to load file at"));
	assert!(stderr.contains("nope.txt"));
}

#[test]
fn invalid_count_fails_without_output() {
	let dir = tempfile::tempdir().unwrap();
	let path = sample_file(dir.path());
	let output = run(&["-f", path.to_str().unwrap(), "--count", "abc"], None);
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8(output.stderr).unwrap().contains("abc"));
}

#[test]
fn unknown_flag_fails() {
	let output = run(&["--frobnicate"], None);
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert!(!output.stderr.is_empty());
}

#[test]
fn word_before_category_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("bad.txt");
	fs::write(&path, "foo\n%word\nbar\n").unwrap();
	let output = run(&["-f", path.to_str().unwrap()], None);
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.contains("line 1"));
	assert!(stderr.contains("'foo'"));
}

#[test]
fn help_succeeds() {
	let output = run(&["--help"], None);
	assert!(output.status.success());
	assert!(String::from_utf8(output.stdout).unwrap().contains("nonsense phrases"));
}
