use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::Theme;

/// Look up a built-in theme by name or alias, ignoring case and separators.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| {
			normalize_name(definition.name) == wanted
				|| definition
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|definition| definition.theme)
}

/// Canonical names of every built-in theme.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.filter(|c| !matches!(c, '-' | '_' | ' '))
		.flat_map(char::to_lowercase)
		.collect()
}
