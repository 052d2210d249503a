//! Trains a word-level Markov chain on a text file and saves the model.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use markov_core::io::read_words_file;
use markov_core::{codec, FrequencyTrie};

#[derive(Parser)]
#[command(name = "markov-train")]
#[command(about = "Train a word-level Markov chain model", long_about = None)]
#[command(version)]
struct Args {
	/// Text file to learn from
	training_file: PathBuf,
	/// Number of preceding words used as context (must be positive)
	chain_order: usize,
	/// Where to write the trained model
	output_model_file: PathBuf,
}

fn main() -> ExitCode {
	markov_cli::init_logging();
	let args: Args = markov_cli::parse_args();
	markov_cli::report(run(&args))
}

fn run(args: &Args) -> Result<()> {
	let tokens = read_words_file(&args.training_file).with_context(|| {
		format!("Unable to read the input file: {}", args.training_file.display())
	})?;

	let mut model = FrequencyTrie::new(args.chain_order)?;

	// Opened before training so a bad path fails fast
	let output = File::create(&args.output_model_file).with_context(|| {
		format!("Unable to open the output file: {}", args.output_model_file.display())
	})?;

	model.train(&tokens);
	info!("trained order {} model on {} words", model.order(), tokens.len());

	codec::write_to(&model, BufWriter::new(output)).with_context(|| {
		format!("Unable to write the model to: {}", args.output_model_file.display())
	})?;

	Ok(())
}
