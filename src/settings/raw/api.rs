use std::time::Duration;

use leetex::ClientOptions;
use serde::Deserialize;

use super::super::resolved::{ConfigSources, SettingsError};
use crate::cli::CliArgs;

/// Backend connection values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<ClientOptions, SettingsError> {
		let defaults = ClientOptions::default();

		let base_url = match self.base_url {
			Some(url) => {
				let trimmed = url.trim();
				if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
					return Err(SettingsError::invalid(
						"api.base_url",
						url.clone(),
						sources.source_for_base_url(),
						"must be an http:// or https:// URL",
					));
				}
				trimmed.to_string()
			}
			None => defaults.base_url,
		};

		let timeout = match self.timeout_secs {
			Some(0) => {
				return Err(SettingsError::invalid(
					"api.timeout_secs",
					"0",
					sources.source_for_timeout(),
					"must be greater than zero",
				));
			}
			Some(secs) => Duration::from_secs(secs),
			None => defaults.timeout,
		};

		Ok(ClientOptions { base_url, timeout })
	}
}
