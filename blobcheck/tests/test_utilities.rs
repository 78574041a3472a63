#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "blobcheck.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "blobcheck";

/// Helper to create a Command for the blobcheck binary.
pub fn blobcheck_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Helper to create an empty output directory.
pub fn get_temp_dir() -> TempDir {
	tempdir().expect("failed to create temp dir")
}

/// The single `.bin` file blobcheck wrote into `dir`.
pub fn single_blob(dir: &Path) -> PathBuf {
	let files: Vec<PathBuf> = std::fs::read_dir(dir)
		.expect("failed to read output dir")
		.map(|entry| entry.expect("failed to read dir entry").path())
		.filter(|path| path.extension().is_some_and(|ext| ext == "bin"))
		.collect();
	assert_eq!(files.len(), 1, "expected exactly one blob in {dir:?}");
	files.into_iter().next().unwrap()
}

/// Helper to write a YAML engine config next to the output.
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
	let path = dir.join("engine.yml");
	std::fs::write(&path, yaml).expect("failed to write config");
	path
}
