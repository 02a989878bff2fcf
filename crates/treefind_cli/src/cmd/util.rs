use std::io::Read;
use std::path::Path;

use crate::cmd::{CliError, Result};

/// Read a whole input file, or stdin when `input` is `-`.
pub(crate) fn read_input(input: &Path) -> Result<Vec<u8>> {
	let read_error = |source| CliError::Read {
		input: input.display().to_string(),
		source,
	};

	if input.as_os_str() == "-" {
		let mut bytes = Vec::new();
		std::io::stdin().read_to_end(&mut bytes).map_err(read_error)?;
		return Ok(bytes);
	}

	std::fs::read(input).map_err(read_error)
}
