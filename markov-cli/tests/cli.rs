//! End-to-end tests of the two programs.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const TRAIN: &str = env!("CARGO_BIN_EXE_markov-train");
const GENERATE: &str = env!("CARGO_BIN_EXE_markov-generate");

fn run(program: &str, args: &[&Path]) -> Output {
	Command::new(program).args(args).output().unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
	let path = dir.join(name);
	fs::write(&path, contents).unwrap();
	path
}

#[test]
fn test_train_then_generate() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write(dir.path(), "corpus.txt", "A b a B a c\n");
	let seed = write(dir.path(), "seed.txt", "A\n");
	let model = dir.path().join("model.bin");

	let trained = run(TRAIN, &[&corpus, Path::new("1"), &model]);
	assert!(trained.status.success(), "{}", String::from_utf8_lossy(&trained.stderr));
	assert!(model.exists());

	let generated = run(GENERATE, &[&seed, Path::new("2"), &model]);
	assert!(generated.status.success(), "{}", String::from_utf8_lossy(&generated.stderr));
	assert_eq!(String::from_utf8_lossy(&generated.stdout), "a b a\n");
}

#[test]
fn test_exhaustion_exits_with_one() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write(dir.path(), "corpus.txt", "the cat sat on the mat");
	let seed = write(dir.path(), "seed.txt", "dog");
	let model = dir.path().join("model.bin");

	assert!(run(TRAIN, &[&corpus, Path::new("1"), &model]).status.success());

	let generated = run(GENERATE, &[&seed, Path::new("1"), &model]);
	assert_eq!(generated.status.code(), Some(1));
	assert!(generated.stdout.is_empty());
	assert!(String::from_utf8_lossy(&generated.stderr).contains("Cannot continue the text"));
}

#[test]
fn test_bad_arguments_exit_with_one() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write(dir.path(), "corpus.txt", "a b c");
	let model = dir.path().join("model.bin");

	// too few arguments
	assert_eq!(run(TRAIN, &[&corpus]).status.code(), Some(1));
	// non-numeric and zero order
	assert_eq!(run(TRAIN, &[&corpus, Path::new("two"), &model]).status.code(), Some(1));
	assert_eq!(run(TRAIN, &[&corpus, Path::new("0"), &model]).status.code(), Some(1));
	// missing training file
	let missing = dir.path().join("missing.txt");
	assert_eq!(run(TRAIN, &[&missing, Path::new("1"), &model]).status.code(), Some(1));
	// order beyond what a model can hold
	let huge = Path::new("18446744073709551615");
	assert_eq!(run(TRAIN, &[&corpus, huge, &model]).status.code(), Some(1));
	assert!(!model.exists());
}

#[test]
fn test_unwritable_output_exits_with_one() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write(dir.path(), "corpus.txt", "a b c");
	let model = dir.path().join("no-such-dir").join("model.bin");

	let trained = run(TRAIN, &[&corpus, Path::new("1"), &model]);
	assert_eq!(trained.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&trained.stderr).contains("Unable to open the output file"));
}

#[test]
fn test_non_utf8_training_text_exits_with_one() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = dir.path().join("corpus.txt");
	fs::write(&corpus, [b'a', b' ', 0xff, 0xfe]).unwrap();
	let model = dir.path().join("model.bin");

	let trained = run(TRAIN, &[&corpus, Path::new("1"), &model]);
	assert_eq!(trained.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&trained.stderr).contains("Unable to read the input file"));
}

#[test]
fn test_generate_bad_arguments_exit_with_one() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write(dir.path(), "corpus.txt", "a b a b a c");
	let seed = write(dir.path(), "seed.txt", "a");
	let model = dir.path().join("model.bin");
	assert!(run(TRAIN, &[&corpus, Path::new("1"), &model]).status.success());

	// too few arguments
	assert_eq!(run(GENERATE, &[&seed, Path::new("1")]).status.code(), Some(1));
	// non-numeric word count
	assert_eq!(run(GENERATE, &[&seed, Path::new("many"), &model]).status.code(), Some(1));
	// unreadable seed file
	let missing_seed = dir.path().join("missing.txt");
	let generated = run(GENERATE, &[&missing_seed, Path::new("1"), &model]);
	assert_eq!(generated.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&generated.stderr).contains("Unable to read the input file"));
	// missing model file
	let missing_model = dir.path().join("missing.bin");
	let generated = run(GENERATE, &[&seed, Path::new("1"), &missing_model]);
	assert_eq!(generated.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&generated.stderr).contains("Unable to load the model file"));
	assert!(generated.stdout.is_empty());
}

#[test]
fn test_malformed_model_exits_with_one() {
	let dir = tempfile::tempdir().unwrap();
	let seed = write(dir.path(), "seed.txt", "a");
	let model = write(dir.path(), "model.bin", "not a model");

	let generated = run(GENERATE, &[&seed, Path::new("1"), &model]);
	assert_eq!(generated.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&generated.stderr).contains("Unable to load the model file"));
}
