/// Number of problems requested per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
	Next,
	Previous,
	First,
}

/// Offset cursor into the remote result set.
///
/// The lower bound is clamped at zero; there is no known upper bound, the
/// backend returns an empty page past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
	offset: usize,
}

impl Pagination {
	#[must_use]
	pub const fn at(offset: usize) -> Self {
		Self { offset }
	}

	#[must_use]
	pub const fn offset(self) -> usize {
		self.offset
	}

	#[must_use]
	pub const fn is_first(self) -> bool {
		self.offset == 0
	}

	#[must_use]
	pub fn moved(self, movement: PageMove) -> Self {
		match movement {
			PageMove::Next => Self::at(self.offset.saturating_add(PAGE_SIZE)),
			PageMove::Previous => Self::at(self.offset.saturating_sub(PAGE_SIZE)),
			PageMove::First => Self::at(0),
		}
	}

	/// One-based inclusive range covered by a page holding `len` results.
	#[must_use]
	pub fn display_range(self, len: usize) -> Option<(usize, usize)> {
		(len > 0).then(|| (self.offset + 1, self.offset + len))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn next_then_previous_round_trips() {
		for offset in [0, 10, 30, 7] {
			let start = Pagination::at(offset);
			let back = start.moved(PageMove::Next).moved(PageMove::Previous);
			assert_eq!(back, start);
		}
	}

	#[test]
	fn previous_clamps_at_zero() {
		assert_eq!(Pagination::at(0).moved(PageMove::Previous).offset(), 0);
		assert_eq!(Pagination::at(4).moved(PageMove::Previous).offset(), 0);
		assert_eq!(
			Pagination::at(4)
				.moved(PageMove::Previous)
				.moved(PageMove::Next)
				.offset(),
			PAGE_SIZE
		);
	}

	#[test]
	fn first_resets_offset() {
		assert!(Pagination::at(40).moved(PageMove::First).is_first());
	}

	#[test]
	fn display_range_is_one_based_and_bounded_by_results() {
		assert_eq!(Pagination::at(10).display_range(4), Some((11, 14)));
		assert_eq!(Pagination::at(0).display_range(0), None);
	}
}
