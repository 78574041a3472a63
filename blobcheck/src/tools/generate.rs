use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// size of the blob in megabytes, fractions allowed
	#[arg(long, value_name = "MB", allow_negative_numbers = true)]
	size_mb: f64,

	/// directory the blob is written to
	#[arg(long, short, value_name = "DIR", default_value = ".")]
	output_dir: PathBuf,

	/// YAML file with chunk_size, view_size and error_max
	#[arg(long, short, value_name = "FILE")]
	config: Option<PathBuf>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let session = super::build_session(arguments.config.as_deref())?;

	let (_, line) = super::generate_and_save(&session, arguments.size_mb, &arguments.output_dir).await?;
	println!("{line}");
	Ok(())
}
