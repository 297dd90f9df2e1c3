use std::sync::Arc;

use anyhow::Result;
use leetex_core::{ProblemService, ReferenceLanguage};
use leetex_tui::Theme;

use super::{App, ExploreOutcome};

/// Builder for the interactive explorer.
pub struct ExplorerUi {
	service: Arc<dyn ProblemService>,
	initial_query: String,
	language: ReferenceLanguage,
	theme: Option<Theme>,
}

impl ExplorerUi {
	pub fn new(service: Arc<dyn ProblemService>) -> Self {
		Self {
			service,
			initial_query: String::new(),
			language: ReferenceLanguage::default(),
			theme: None,
		}
	}

	/// Query searched as soon as the explorer starts.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_language(mut self, language: ReferenceLanguage) -> Self {
		self.language = language;
		self
	}

	/// Use the named theme; unknown names keep the current one.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match leetex_tui::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => tracing::warn!(theme = name, "unknown theme; keeping default"),
		}
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Build the [`App`] without starting the terminal.
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(self.service);
		app.set_language(self.language);
		if !self.initial_query.is_empty() {
			app.set_query(self.initial_query);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app
	}

	/// Run the interactive explorer with the configured options.
	pub fn run(self) -> Result<ExploreOutcome> {
		self.into_app().run()
	}
}
