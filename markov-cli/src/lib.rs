//! Shared plumbing for the `markov-train` and `markov-generate` programs.

use std::process::ExitCode;

use clap::Parser;

/// Initializes logging (warnings and errors only, unless `RUST_LOG` says otherwise).
pub fn init_logging() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Parses the command line, exiting with status 1 on any usage error.
///
/// `--help` and `--version` still exit with status 0.
pub fn parse_args<P: Parser>() -> P {
	match P::try_parse() {
		Ok(args) => args,
		Err(err) => {
			let _ = err.print();
			std::process::exit(if err.use_stderr() { 1 } else { 0 });
		}
	}
}

/// Prints the error chain, if any, and turns the outcome into an exit code.
pub fn report(result: anyhow::Result<()>) -> ExitCode {
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{err:#}");
			ExitCode::FAILURE
		}
	}
}

/// Joins the seed and the generated words into one output line.
pub fn render_line<S: AsRef<str>>(seed: &[S], generated: &[S]) -> String {
	seed.iter()
		.chain(generated)
		.map(AsRef::<str>::as_ref)
		.collect::<Vec<_>>()
		.join(" ")
}
