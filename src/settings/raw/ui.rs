use leetex_core::ReferenceLanguage;
use serde::Deserialize;

use super::super::resolved::{ConfigSources, SettingsError};
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) language: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) initial_query: String,
	pub(super) language: ReferenceLanguage,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(language) = cli.language {
			self.language = Some(language.as_str().to_string());
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, SettingsError> {
		let language = match self.language {
			Some(value) => value.parse::<ReferenceLanguage>().map_err(|err| {
				SettingsError::invalid(
					"ui.language",
					value.clone(),
					sources.source_for_language(),
					err.to_string(),
				)
			})?,
			None => ReferenceLanguage::default(),
		};

		if let Some(theme) = &self.theme
			&& leetex_tui::by_name(theme).is_none()
		{
			return Err(SettingsError::invalid(
				"ui.theme",
				theme.clone(),
				sources.source_for_theme(),
				format!("unknown theme (available: {})", leetex_tui::names().join(", ")),
			));
		}

		Ok(UiResolution {
			initial_query: self.initial_query.unwrap_or_default(),
			language,
			theme: self.theme,
		})
	}
}
