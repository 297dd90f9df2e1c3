use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(out, "  API base URL: {}", config.api.base_url);
	let _ = writeln!(out, "  Request timeout: {}s", config.api.timeout.as_secs());
	let _ = writeln!(out, "  Reference language: {}", config.language);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	out
}
