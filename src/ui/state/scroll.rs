/// Detail panels that can be scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPanel {
	#[default]
	Reference,
	Generated,
	Description,
	Explanation,
}

impl DetailPanel {
	const ALL: [Self; 4] = [
		Self::Reference,
		Self::Generated,
		Self::Description,
		Self::Explanation,
	];

	fn index(self) -> usize {
		match self {
			Self::Reference => 0,
			Self::Generated => 1,
			Self::Description => 2,
			Self::Explanation => 3,
		}
	}

	/// The next panel in reading order, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}
}

/// Scroll offsets of the detail panels and the one that scroll keys move.
///
/// Offsets are stored as requested and clamped when drawn; the renderer
/// writes the clamped value back.
#[derive(Debug, Clone, Default)]
pub(crate) struct DetailScroll {
	active: DetailPanel,
	offsets: [u16; 4],
}

impl DetailScroll {
	pub(crate) fn active(&self) -> DetailPanel {
		self.active
	}

	pub(crate) fn cycle(&mut self) {
		self.active = self.active.next();
	}

	pub(crate) fn offset(&self, panel: DetailPanel) -> u16 {
		self.offsets[panel.index()]
	}

	pub(crate) fn set(&mut self, panel: DetailPanel, offset: u16) {
		self.offsets[panel.index()] = offset;
	}

	/// Move the active panel by `delta` lines.
	pub(crate) fn scroll_by(&mut self, delta: i32) {
		let slot = &mut self.offsets[self.active.index()];
		let moved = i32::from(*slot).saturating_add(delta);
		*slot = u16::try_from(moved.max(0)).unwrap_or(u16::MAX);
	}

	pub(crate) fn reset(&mut self) {
		self.offsets = [0; 4];
	}

	pub(crate) fn reset_panel(&mut self, panel: DetailPanel) {
		self.set(panel, 0);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scrolling_up_stops_at_the_top() {
		let mut scroll = DetailScroll::default();
		scroll.scroll_by(3);
		scroll.scroll_by(-10);
		assert_eq!(scroll.offset(DetailPanel::Reference), 0);
	}

	#[test]
	fn only_the_active_panel_moves() {
		let mut scroll = DetailScroll::default();
		scroll.cycle();
		assert_eq!(scroll.active(), DetailPanel::Generated);
		scroll.scroll_by(4);
		assert_eq!(scroll.offset(DetailPanel::Generated), 4);
		assert_eq!(scroll.offset(DetailPanel::Reference), 0);

		scroll.reset_panel(DetailPanel::Generated);
		assert_eq!(scroll.offset(DetailPanel::Generated), 0);
	}

	#[test]
	fn cycling_wraps_back_to_the_reference_panel() {
		let mut panel = DetailPanel::Reference;
		for _ in 0..4 {
			panel = panel.next();
		}
		assert_eq!(panel, DetailPanel::Reference);
	}
}
