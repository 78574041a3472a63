use anyhow::{Result, ensure};
use blobcheck_core::{Session, parse_megabytes};
use clap::Args;
use std::{
	io::{BufRead, Write},
	path::{Path, PathBuf},
};

const HELP: &str = "\
commands:
  generate <MB>   generate a blob of <MB> megabytes and save it
  verify <PATH>   verify a file against the last generated blob
  status          show the current blob
  help            show this text
  quit            end the session";

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// directory generated blobs are written to
	#[arg(long, short, value_name = "DIR", default_value = ".")]
	output_dir: PathBuf,

	/// YAML file with chunk_size, view_size and error_max
	#[arg(long, short, value_name = "FILE")]
	config: Option<PathBuf>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let session = super::build_session(arguments.config.as_deref())?;
	let stdin = std::io::stdin();
	let stdout = std::io::stdout();
	run_script(&session, &arguments.output_dir, stdin.lock(), stdout.lock()).await
}

/// Executes one command per input line until `quit` or end of input.
///
/// Failing commands print `Error: ...` and the session continues.
pub async fn run_script<R: BufRead, W: Write>(session: &Session, output_dir: &Path, input: R, mut output: W) -> Result<()> {
	for line in input.lines() {
		let line = line?;
		let line = line.trim();
		let (command, argument) = line
			.split_once(char::is_whitespace)
			.map_or((line, ""), |(command, argument)| (command, argument.trim()));

		let reply = match command {
			"" => continue,
			"quit" | "exit" => break,
			"help" => Ok(HELP.to_string()),
			"status" => Ok(status(session).await),
			"generate" => generate(session, argument, output_dir).await,
			"verify" => verify(session, argument).await,
			other => Ok(format!("unknown command {other:?}, type \"help\" for a list")),
		};

		match reply {
			Ok(text) => writeln!(output, "{text}")?,
			Err(err) => writeln!(output, "Error: {err:#}")?,
		}
		output.flush()?;
	}
	Ok(())
}

async fn status(session: &Session) -> String {
	match session.reference().await {
		Some(blob) => format!(
			"current blob: {} in {} chunk(s)",
			blob.size_label(),
			blob.chunk_count()
		),
		None => "no blob generated yet".to_string(),
	}
}

async fn generate(session: &Session, argument: &str, output_dir: &Path) -> Result<String> {
	let size_mb = parse_megabytes(argument)?;
	log::debug!("generating {size_mb}MB");
	let (_, line) = super::generate_and_save(session, size_mb, output_dir).await?;
	Ok(line)
}

async fn verify(session: &Session, argument: &str) -> Result<String> {
	ensure!(!argument.is_empty(), "verify needs a file path");
	let outcome = session.verify_file(Path::new(argument)).await?;
	Ok(outcome.lines().join("\n"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::TempDir;
	use blobcheck_core::{EngineConfig, random::SequenceFiller};

	fn session() -> Session {
		Session::builder()
			.config(EngineConfig {
				chunk_size: 4096,
				..EngineConfig::default()
			})
			.random_filler(Box::new(SequenceFiller::new(0)))
			.silent(true)
			.build()
	}

	async fn execute(session: &Session, dir: &Path, script: &str) -> String {
		let mut output = Vec::new();
		run_script(session, dir, script.as_bytes(), &mut output).await.unwrap();
		String::from_utf8(output).unwrap()
	}

	#[tokio::test]
	async fn verify_before_generate() {
		let dir = TempDir::new().unwrap();
		let output = execute(&session(), dir.path(), "status\nverify /tmp/anything.bin\n").await;
		assert_eq!(
			output,
			"no blob generated yet\nNothing to verify against: generate a blob first.\n"
		);
	}

	#[tokio::test]
	async fn generate_and_verify() {
		let dir = TempDir::new().unwrap();
		let session = session();
		let output = execute(&session, dir.path(), "generate 0.01\n").await;

		// the sequence filler names the first blob deterministically
		let path = dir.path().canonicalize().unwrap().join("000102030405060708090a0b0c0d0e0f.bin");
		assert_eq!(output, format!("Download {} (0.01MB)\n", path.display()));

		let script = format!("status\nverify {}\n", path.display());
		let output = execute(&session, dir.path(), &script).await;
		assert_eq!(
			output,
			"current blob: 000102030405060708090a0b0c0d0e0f.bin (0.009999275207519531MB) in 3 chunk(s)\n\
			 Blob verification succeeded: Blobs match exactly.\n"
		);
	}

	#[tokio::test]
	async fn errors_do_not_end_the_session() {
		let dir = TempDir::new().unwrap();
		let output = execute(&session(), dir.path(), "generate -1\ngenerate abc\nfoo\nhelp\nquit\nstatus\n").await;
		let lines: Vec<&str> = output.lines().collect();
		assert!(lines[0].starts_with("Error: size must be greater than zero"));
		assert!(lines[1].starts_with("Error: size must be a number of megabytes"));
		assert_eq!(lines[2], "unknown command \"foo\", type \"help\" for a list");
		assert_eq!(lines[3], "commands:");
		// nothing after quit is executed
		assert!(!output.contains("no blob generated yet"));
	}

	#[tokio::test]
	async fn failed_save_keeps_the_previous_blob() {
		let dir = TempDir::new().unwrap();
		let session = session();
		execute(&session, dir.path(), "generate 0.01\n").await;

		let missing = dir.path().join("missing");
		let output = execute(&session, &missing, "generate 1\nstatus\n").await;
		let lines: Vec<&str> = output.lines().collect();
		assert!(lines[0].starts_with("Error: output directory"));
		assert_eq!(
			lines[1],
			"current blob: 000102030405060708090a0b0c0d0e0f.bin (0.009999275207519531MB) in 3 chunk(s)"
		);
	}
}
