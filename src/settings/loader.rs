use anyhow::Result;

use super::raw::RawConfig;
use super::resolved::{ResolvedConfig, SettingsError};
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder.try_deserialize().map_err(SettingsError::Load)?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli)?;
	tracing::debug!(?resolved, "configuration resolved");
	Ok(resolved)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use clap::Parser;
	use leetex_core::ReferenceLanguage;

	use super::*;

	fn cli_with_config(contents: &str, extra: &[&str]) -> (tempfile::TempDir, CliArgs) {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("leetex.toml");
		fs::write(&path, contents).expect("write config");
		let mut args = vec![
			"leetex".to_string(),
			"--no-config".to_string(),
			"--config".to_string(),
			path.display().to_string(),
		];
		args.extend(extra.iter().map(|arg| (*arg).to_string()));
		(dir, CliArgs::parse_from(args))
	}

	#[test]
	fn file_values_are_resolved() {
		let (_dir, cli) = cli_with_config(
			r#"
[api]
base_url = "http://example.test/api"
timeout_secs = 5

[ui]
initial_query = "graph"
language = "python"
theme = "light"
"#,
			&[],
		);
		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.api.base_url, "http://example.test/api");
		assert_eq!(resolved.api.timeout, Duration::from_secs(5));
		assert_eq!(resolved.initial_query, "graph");
		assert_eq!(resolved.language, ReferenceLanguage::Python);
		assert_eq!(resolved.theme.as_deref(), Some("light"));
	}

	#[test]
	fn cli_flags_override_file_values() {
		let (_dir, cli) = cli_with_config(
			"[ui]\ninitial_query = \"graph\"\nlanguage = \"java\"\n",
			&["--query", "tree", "-L", "cpp", "--timeout", "9"],
		);
		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.initial_query, "tree");
		assert_eq!(resolved.language, ReferenceLanguage::Cpp);
		assert_eq!(resolved.api.timeout, Duration::from_secs(9));
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from(["leetex", "--no-config", "--config", "/nonexistent/leetex.toml"]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn unknown_language_in_file_is_rejected() {
		let (_dir, cli) = cli_with_config("[ui]\nlanguage = \"cobol\"\n", &[]);
		let message = format!("{:#}", load(&cli).expect_err("invalid language"));
		assert!(message.contains("ui.language"), "message was {message}");
		assert!(message.contains("cobol"));
	}
}
