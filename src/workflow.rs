use std::sync::Arc;

use anyhow::Result;
use leetex::{ExploreOutcome, ExplorerUi, HttpProblemService};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive explorer.
pub(crate) struct ExploreWorkflow {
	ui: ExplorerUi,
}

impl ExploreWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			api,
			initial_query,
			language,
			theme,
		} = config;

		let service = HttpProblemService::new(&api)?;
		let mut ui = ExplorerUi::new(Arc::new(service))
			.with_initial_query(initial_query)
			.with_language(language);
		if let Some(theme) = theme {
			ui = ui.with_theme_name(&theme);
		}
		Ok(Self { ui })
	}

	pub(crate) fn run(self) -> Result<ExploreOutcome> {
		self.ui.run()
	}
}
