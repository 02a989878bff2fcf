use crate::tree::path::render_steps;
use crate::tree::{PathStep, ResolveError, Value};

/// Walk `steps` over `root`, returning the addressed sub-value by reference.
///
/// Each step inspects only the direct child of the current node, so the work
/// is bounded by `steps.len()`. The first failing step ends the walk.
pub fn resolve<'v>(root: &'v Value, steps: &[PathStep]) -> Result<&'v Value, ResolveError> {
	let mut current = root;

	for (step_index, step) in steps.iter().enumerate() {
		current = match (step, current) {
			(PathStep::Key(key), Value::Object(entries)) => entries.get(key.as_str()).ok_or_else(|| ResolveError::KeyNotFound {
				key: key.clone(),
				step: step_index,
				prefix: render_steps(&steps[..step_index]),
			})?,
			(PathStep::Key(key), other) => {
				return Err(ResolveError::NotAnObject {
					at: key.clone(),
					found: other.kind(),
					step: step_index,
					prefix: render_steps(&steps[..step_index]),
				});
			}
			(PathStep::Index(index), Value::Array(items)) => items.get(*index).ok_or_else(|| ResolveError::IndexOutOfRange {
				index: *index,
				length: items.len(),
				step: step_index,
				prefix: render_steps(&steps[..step_index]),
			})?,
			(PathStep::Index(index), other) => {
				return Err(ResolveError::NotAnArray {
					at: *index,
					found: other.kind(),
					step: step_index,
					prefix: render_steps(&steps[..step_index]),
				});
			}
		};
	}

	Ok(current)
}
