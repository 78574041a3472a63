use anyhow::{Context, Result, bail};
use clap::Args;
use std::{
	fs::OpenOptions,
	io::{Read, Seek, SeekFrom, Write},
	path::{Path, PathBuf},
};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// size of the blob in megabytes, fractions allowed
	#[arg(long, value_name = "MB", allow_negative_numbers = true)]
	size_mb: f64,

	/// directory the blob is written to
	#[arg(long, short, value_name = "DIR", default_value = ".")]
	output_dir: PathBuf,

	/// flip this many evenly spaced bytes in the saved file before verifying
	#[arg(long, value_name = "N", default_value_t = 0)]
	corrupt: u64,

	/// YAML file with chunk_size, view_size and error_max
	#[arg(long, short, value_name = "FILE")]
	config: Option<PathBuf>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let session = super::build_session(arguments.config.as_deref())?;

	let (path, line) = super::generate_and_save(&session, arguments.size_mb, &arguments.output_dir).await?;
	println!("{line}");

	if arguments.corrupt > 0 {
		let offsets = corrupt_file(&path, arguments.corrupt)?;
		log::info!("flipped {} byte(s) in {path:?}", offsets.len());
	}

	let outcome = session.verify_file(&path).await?;
	for line in outcome.lines() {
		println!("{line}");
	}

	if !outcome.is_match() {
		bail!("{path:?} does not match the generated blob")
	}
	Ok(())
}

/// Offsets of `count` bytes spread evenly over `length` bytes, each in the middle of
/// its segment. At most `length` offsets are returned.
fn spread_offsets(length: u64, count: u64) -> Vec<u64> {
	let count = count.min(length);
	(0..count)
		.map(|index| ((2 * index + 1) as u128 * length as u128 / (2 * count) as u128) as u64)
		.collect()
}

/// Inverts the bytes at evenly spaced offsets of the file and returns those offsets.
fn corrupt_file(path: &Path, count: u64) -> Result<Vec<u64>> {
	let mut file = OpenOptions::new()
		.read(true)
		.write(true)
		.open(path)
		.with_context(|| format!("failed to open {path:?} for corruption"))?;
	let length = file.metadata()?.len();

	let offsets = spread_offsets(length, count);
	let mut byte = [0u8; 1];
	for &offset in &offsets {
		file.seek(SeekFrom::Start(offset))?;
		file.read_exact(&mut byte)?;
		byte[0] ^= 0xFF;
		file.seek(SeekFrom::Start(offset))?;
		file.write_all(&byte)?;
	}
	file.flush()?;
	Ok(offsets)
}
