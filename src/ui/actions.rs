use leetex_core::{Action, PageMove, ReferenceLanguage};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, ExploreOutcome, Focus};

/// Lines moved by `d` and `u`.
const SCROLL_PAGE: i32 = 10;

impl App<'_> {
	/// Handle one key press. Returns the outcome once the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<ExploreOutcome> {
		let interrupt =
			key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
		if key.code == KeyCode::Esc || interrupt {
			return Some(self.outcome(false));
		}

		match self.focus {
			Focus::Search => {
				self.handle_search_key(key);
				None
			}
			Focus::Results => self.handle_results_key(key),
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Enter => {
				if self.submit_query() {
					self.set_focus(Focus::Results);
				}
			}
			KeyCode::Tab | KeyCode::Down => self.set_focus(Focus::Results),
			_ => {
				if self.search_input.input(key) {
					let query = self.search_input.text().to_string();
					self.apply(Action::EditQuery(query));
				}
			}
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent) -> Option<ExploreOutcome> {
		let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
		match key.code {
			KeyCode::Up if shifted => self.detail_scroll.scroll_by(-1),
			KeyCode::Down if shifted => self.detail_scroll.scroll_by(1),
			KeyCode::Up => self.move_cursor_up(),
			KeyCode::Down => self.move_cursor_down(),
			KeyCode::Enter => {
				if let Some(index) = self.table_state.selected() {
					self.apply(Action::Select(index));
				}
			}
			KeyCode::Char('n') | KeyCode::PageDown => self.apply(Action::Page(PageMove::Next)),
			KeyCode::Char('p') | KeyCode::PageUp => self.apply(Action::Page(PageMove::Previous)),
			KeyCode::Char('g') | KeyCode::Home => self.apply(Action::Page(PageMove::First)),
			KeyCode::Char('l') => self.apply(Action::CycleLanguage),
			KeyCode::Char(digit @ '1'..='4') => {
				let index = usize::from(digit as u8 - b'1');
				if let Some(language) = ReferenceLanguage::from_index(index) {
					self.apply(Action::SetLanguage(language));
				}
			}
			KeyCode::Char('j') => self.detail_scroll.scroll_by(1),
			KeyCode::Char('k') => self.detail_scroll.scroll_by(-1),
			KeyCode::Char('d') => self.detail_scroll.scroll_by(SCROLL_PAGE),
			KeyCode::Char('u') => self.detail_scroll.scroll_by(-SCROLL_PAGE),
			KeyCode::Char('v') => self.detail_scroll.cycle(),
			KeyCode::Char('r') => self.apply(Action::Retry),
			KeyCode::Char('o') => return Some(self.outcome(true)),
			KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => self.set_focus(Focus::Search),
			_ => {}
		}
		None
	}

	fn outcome(&self, accepted: bool) -> ExploreOutcome {
		ExploreOutcome {
			accepted,
			query: self.search_input.text().to_string(),
			selection: if accepted {
				self.explorer.selected().cloned()
			} else {
				None
			},
		}
	}

	fn move_cursor_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_cursor_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.result_count()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}
