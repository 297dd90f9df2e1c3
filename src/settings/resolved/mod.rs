use leetex::ClientOptions;
use leetex_core::ReferenceLanguage;

mod errors;
mod sources;
mod summary;

pub(crate) use errors::SettingsError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub api: ClientOptions,
	pub initial_query: String,
	pub language: ReferenceLanguage,
	pub theme: Option<String>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::summary(self));
	}
}
