use anyhow::Result;
use leetex::ExploreOutcome;
use serde_json::json;

/// Print a plain-text representation of the explorer outcome.
pub(crate) fn print_plain(outcome: &ExploreOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &ExploreOutcome) -> String {
	if !outcome.accepted {
		return format!("Explorer cancelled (query: '{}')", outcome.query);
	}

	match &outcome.selection {
		Some(problem) => format!(
			"{}\t{}\t{}\t{}",
			problem.problem_id,
			problem.title,
			problem.difficulty,
			problem.url()
		),
		None => "No selection".to_string(),
	}
}

/// Format the explorer outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ExploreOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(problem) => json!({
			"problem_id": problem.problem_id,
			"title": problem.title,
			"difficulty": problem.difficulty,
			"slug": problem.slug,
			"url": problem.url(),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the explorer outcome.
pub(crate) fn print_json(outcome: &ExploreOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
