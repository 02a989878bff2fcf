use serde::Serialize;
use treefind::tree::{PathStep, TreePath};

use crate::cmd::Result;

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum StepJson<'a> {
	Key(&'a str),
	Index(usize),
}

/// Parse a path expression and list its steps.
pub fn run(path_expr: String, json: bool) -> Result<()> {
	let path = TreePath::parse(&path_expr)?;

	if json {
		let steps: Vec<StepJson<'_>> = path
			.steps()
			.iter()
			.map(|step| match step {
				PathStep::Key(key) => StepJson::Key(key),
				PathStep::Index(index) => StepJson::Index(*index),
			})
			.collect();
		println!("{}", serde_json::to_string_pretty(&steps)?);
		return Ok(());
	}

	for step in path.steps() {
		match step {
			PathStep::Key(key) => println!("key {key}"),
			PathStep::Index(index) => println!("index {index}"),
		}
	}

	Ok(())
}
