use std::sync::mpsc::TryRecvError;

use leetex_core::Action;

use super::{App, DetailPanel};

impl App<'_> {
	/// Feed `action` to the explorer and start whatever requests it asks for.
	pub(crate) fn apply(&mut self, action: Action) {
		let selecting = matches!(action, Action::Select(_));
		let language = self.explorer.language();
		let effects = self.explorer.apply(action);
		if selecting && !effects.is_empty() {
			self.detail_scroll.reset();
		} else if self.explorer.language() != language {
			self.detail_scroll.reset_panel(DetailPanel::Reference);
		}
		for effect in effects {
			self.requests.dispatch(effect);
		}
	}

	/// Search for the current query. Returns `false` when the query is blank.
	pub(crate) fn submit_query(&mut self) -> bool {
		if self.explorer.query().trim().is_empty() {
			return false;
		}
		self.apply(Action::SubmitQuery);
		true
	}

	/// Drain completed requests waiting on the channel.
	pub(crate) fn pump_responses(&mut self) {
		loop {
			match self.requests.try_recv() {
				Ok(action) => self.handle_response(action),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_response(&mut self, action: Action) {
		let fresh_results = matches!(
			&action,
			Action::SearchCompleted { id, .. } if self.explorer.results().pending_id() == Some(*id)
		);
		self.apply(action);
		if fresh_results {
			self.table_state.select(None);
			self.ensure_cursor();
		}
	}
}
