use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;
use treefind::tree::{Number, Shape, Value, find_ref, find_shaped};

use crate::cmd::util::read_input;
use crate::cmd::{CliError, Result};

/// Shape names accepted by `--as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
	String,
	Number,
	#[value(alias = "boolean")]
	Bool,
	#[value(alias = "map")]
	Object,
	Array,
}

impl From<ShapeArg> for Shape {
	fn from(arg: ShapeArg) -> Self {
		match arg {
			ShapeArg::String => Self::String,
			ShapeArg::Number => Self::Number,
			ShapeArg::Bool => Self::Bool,
			ShapeArg::Object => Self::Object,
			ShapeArg::Array => Self::Array,
		}
	}
}

#[derive(Serialize)]
struct FindJson<'a> {
	path: &'a str,
	kind: &'static str,
	value: serde_json::Value,
}

/// Decode a JSON document and print the value at `path_expr`.
pub fn run(input: PathBuf, path_expr: String, shape: Option<ShapeArg>, json: bool) -> Result<()> {
	let bytes = read_input(&input)?;
	let root = Value::from_json_slice(&bytes).map_err(|source| CliError::Decode {
		input: input.display().to_string(),
		source,
	})?;
	debug!(input = %input.display(), len = bytes.len(), "decoded document");

	let found = match shape {
		Some(shape) => find_shaped(&root, &path_expr, shape.into())?,
		None => find_ref(&root, &path_expr)?,
	};
	debug!(path = %path_expr, kind = %found.kind(), "resolved path");

	if json {
		println!("{}", render_json(&path_expr, found)?);
	} else {
		println!("{}", render_text(found)?);
	}
	Ok(())
}

/// Plain rendering: strings unquoted, numbers in integer form when integral, JSON otherwise.
pub(crate) fn render_text(value: &Value) -> Result<String> {
	let text = match value {
		Value::String(text) => text.clone(),
		Value::Number(number) => Number::new(*number).to_text(),
		other => serde_json::to_string(&serde_json::Value::from(other))?,
	};
	Ok(text)
}

/// Structured rendering with the path and the located value's kind.
pub(crate) fn render_json(path_expr: &str, value: &Value) -> Result<String> {
	let out = FindJson {
		path: path_expr,
		kind: value.kind().as_str(),
		value: serde_json::Value::from(value),
	};
	Ok(serde_json::to_string_pretty(&out)?)
}
