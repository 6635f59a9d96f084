use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::env;

use log::debug;

use crate::error::{Error, Result};

/// Environment variable naming the word file.
pub const FILE_ENV: &str = "BULLSHIT_FILE";

/// Word file name looked up in configuration directories.
pub const FILE_NAME: &str = "bullshit.txt";

/// Last-resort, system-wide word file.
pub const SYSTEM_FILE: &str = "/usr/share/bullshit.txt";

/// Reads a text file and returns its whole content.
///
/// - Reads the entire file into memory
/// - Any failure is tagged with the offending path
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|e| Error::io(path, e))?;
	Ok(contents)
}

/// Determines the default word file.
///
/// Candidates, first existing file wins:
/// 1. `$BULLSHIT_FILE`
/// 2. `<config dir>/bullshit.txt`
/// 3. `<home>/.config/bullshit.txt`
/// 4. `/usr/share/bullshit.txt`, returned even if it does not exist
pub fn default_input_file() -> PathBuf {
	resolve_input_file(env::var_os(FILE_ENV), dirs::config_dir(), dirs::home_dir())
}

/// Lookup behind [`default_input_file`], with every environment input passed in.
pub fn resolve_input_file(
	env_file: Option<OsString>,
	config_dir: Option<PathBuf>,
	home_dir: Option<PathBuf>,
) -> PathBuf {
	let candidates = env_file
		.map(PathBuf::from)
		.into_iter()
		.chain(config_dir.map(|dir| dir.join(FILE_NAME)))
		.chain(home_dir.map(|dir| dir.join(".config").join(FILE_NAME)));

	for candidate in candidates {
		if candidate.is_file() {
			debug!("using word file {}", candidate.display());
			return candidate;
		}
		debug!("no word file at {}", candidate.display());
	}

	PathBuf::from(SYSTEM_FILE)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn read_file_reports_missing_path() {
		let err = read_file("/definitely/not/here.txt").unwrap_err();
		assert!(err.is_io());
		assert!(err.to_string().contains("/definitely/not/here.txt"));
	}

	#[test]
	fn env_file_wins_when_present() {
		let dir = tempfile::tempdir().unwrap();
		let env_file = dir.path().join("custom.txt");
		fs::write(&env_file, "%word\nsynergy\n").unwrap();
		fs::create_dir_all(dir.path().join("conf")).unwrap();
		fs::write(dir.path().join("conf").join(FILE_NAME), "").unwrap();

		let found = resolve_input_file(
			Some(env_file.clone().into_os_string()),
			Some(dir.path().join("conf")),
			None,
		);
		assert_eq!(found, env_file);
	}

	#[test]
	fn missing_env_file_falls_through_to_config_dir() {
		let dir = tempfile::tempdir().unwrap();
		let conf = dir.path().join("conf");
		fs::create_dir_all(&conf).unwrap();
		fs::write(conf.join(FILE_NAME), "").unwrap();

		let found = resolve_input_file(
			Some(dir.path().join("gone.txt").into_os_string()),
			Some(conf.clone()),
			Some(dir.path().to_path_buf()),
		);
		assert_eq!(found, conf.join(FILE_NAME));
	}

	#[test]
	fn home_dot_config_is_third_choice() {
		let dir = tempfile::tempdir().unwrap();
		let home_conf = dir.path().join(".config");
		fs::create_dir_all(&home_conf).unwrap();
		fs::write(home_conf.join(FILE_NAME), "").unwrap();

		let found = resolve_input_file(None, Some(dir.path().join("empty")), Some(dir.path().to_path_buf()));
		assert_eq!(found, home_conf.join(FILE_NAME));
	}

	#[test]
	fn system_file_is_the_fallback() {
		let dir = tempfile::tempdir().unwrap();
		let found = resolve_input_file(None, Some(dir.path().to_path_buf()), Some(dir.path().to_path_buf()));
		assert_eq!(found, PathBuf::from(SYSTEM_FILE));
	}
}
