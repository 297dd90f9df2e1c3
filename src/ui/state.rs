use std::sync::Arc;

use leetex_core::{Action, Explorer, ProblemService, ReferenceLanguage};
use leetex_tui::{SearchInput, Theme};
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

mod request_runtime;
mod scroll;

use request_runtime::RequestRuntime;
pub use scroll::DetailPanel;
pub(crate) use scroll::DetailScroll;

const QUERY_PLACEHOLDER: &str = "keyword, e.g. graph";

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Search,
	Results,
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.requests.shutdown();
	}
}

pub struct App<'a> {
	pub(crate) explorer: Explorer,
	pub search_input: SearchInput<'a>,
	pub table_state: TableState,
	pub(crate) focus: Focus,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) detail_scroll: DetailScroll,
	pub(super) requests: RequestRuntime,
}

impl<'a> App<'a> {
	pub fn new(service: Arc<dyn ProblemService>) -> Self {
		Self {
			explorer: Explorer::default(),
			search_input: query_input(String::new()),
			table_state: TableState::default(),
			focus: Focus::Search,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			detail_scroll: DetailScroll::default(),
			requests: RequestRuntime::new(service),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_language(&mut self, language: ReferenceLanguage) {
		self.apply(Action::SetLanguage(language));
	}

	/// Replace the query text without searching.
	pub fn set_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		self.search_input = query_input(query.clone());
		self.search_input.set_focused(self.focus == Focus::Search);
		self.apply(Action::EditQuery(query));
	}

	#[must_use]
	pub fn explorer(&self) -> &Explorer {
		&self.explorer
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Detail panel moved by the scroll keys.
	#[must_use]
	pub fn scroll_target(&self) -> DetailPanel {
		self.detail_scroll.active()
	}

	/// Current scroll offset of `panel`, as last drawn.
	#[must_use]
	pub fn scroll_offset(&self, panel: DetailPanel) -> u16 {
		self.detail_scroll.offset(panel)
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.search_input.set_focused(focus == Focus::Search);
		self.ensure_cursor();
	}

	pub(crate) fn result_count(&self) -> usize {
		self.explorer.results().value().map_or(0, Vec::len)
	}

	/// Keep the table cursor on a visible row.
	pub(crate) fn ensure_cursor(&mut self) {
		let len = self.result_count();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}
}

fn query_input<'a>(initial: String) -> SearchInput<'a> {
	let mut input = SearchInput::new(initial);
	input.set_placeholder(QUERY_PLACEHOLDER);
	input.set_focused(true);
	input
}
