mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

/// Generate large random blobs and verify byte-for-byte that a copy is identical.
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Generate a random blob and save it
	Generate(tools::generate::Subcommand),

	/// Generate, save, optionally corrupt and verify a blob
	Roundtrip(tools::roundtrip::Subcommand),

	/// Interactive session reading commands from stdin
	Session(tools::session::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Generate(arguments) => tools::generate::run(arguments),
		Commands::Roundtrip(arguments) => tools::roundtrip::run(arguments),
		Commands::Session(arguments) => tools::session::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["blobcheck"]).unwrap_err().to_string();
		assert!(err.starts_with("Generate large random blobs and verify byte-for-byte that a copy is identical."));
		assert!(err.contains("\nUsage: blobcheck [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["blobcheck", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("blobcheck "));
	}

	#[test]
	fn generate_subcommand() {
		let output = run_command(vec!["blobcheck", "generate"]).unwrap_err().to_string();
		assert!(output.starts_with("Generate a random blob and save it"));
	}

	#[test]
	fn roundtrip_subcommand() {
		let output = run_command(vec!["blobcheck", "roundtrip"]).unwrap_err().to_string();
		assert!(output.starts_with("Generate, save, optionally corrupt and verify a blob"));
	}
}
