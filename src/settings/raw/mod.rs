use std::env;

use serde::Deserialize;

use crate::cli::{API_URL_ENV, CliArgs};

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, SettingsError};

mod api;
mod ui;

use api::ApiSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig, SettingsError> {
		let sources = ConfigSources {
			api_base_url: if cli.api_url_from_env {
				Some(SettingSource::Environment(API_URL_ENV))
			} else {
				detect_source(
					cli.api_url.is_some(),
					self.api.base_url.is_some(),
					"LEETEX__API__BASE_URL",
					"--api-url",
					"api.base_url",
				)
			},
			api_timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.api.timeout_secs.is_some(),
				"LEETEX__API__TIMEOUT_SECS",
				"--timeout",
				"api.timeout_secs",
			),
			ui_language: detect_source(
				cli.language.is_some(),
				self.ui.language.is_some(),
				"LEETEX__UI__LANGUAGE",
				"--language",
				"ui.language",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"LEETEX__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let api = self.api.finalize(&sources)?;
		let ui = self.ui.finalize(&sources)?;

		Ok(ResolvedConfig {
			api,
			initial_query: ui.initial_query,
			language: ui.language,
			theme: ui.theme,
		})
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
