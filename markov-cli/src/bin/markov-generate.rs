//! Continues a seed text with words generated from a trained model.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;
use markov_core::codec;
use markov_core::io::read_words_file;

#[derive(Parser)]
#[command(name = "markov-generate")]
#[command(about = "Continue a text using a trained Markov chain model", long_about = None)]
#[command(version)]
struct Args {
	/// Text file whose last words seed the generation
	seed_text_file: PathBuf,
	/// Number of words to generate
	words_to_generate: usize,
	/// Model written by markov-train
	model_file: PathBuf,
}

fn main() -> ExitCode {
	markov_cli::init_logging();
	let args: Args = markov_cli::parse_args();
	markov_cli::report(run(&args))
}

fn run(args: &Args) -> Result<()> {
	let seed = read_words_file(&args.seed_text_file).with_context(|| {
		format!("Unable to read the input file: {}", args.seed_text_file.display())
	})?;

	let model = codec::load(&args.model_file)
		.with_context(|| format!("Unable to load the model file: {}", args.model_file.display()))?;

	let generated = match model.extend(&seed, args.words_to_generate) {
		Ok(words) => words,
		Err(err) if err.is_exhausted() => {
			debug!("{err}");
			bail!(
				"Cannot continue the text using the given model. \
				Consider using bigger training text with more complete vocabulary."
			);
		}
		Err(err) => return Err(err.into()),
	};

	println!("{}", markov_cli::render_line(&seed, &generated));
	Ok(())
}
