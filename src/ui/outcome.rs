use leetex_core::Problem;

/// Result of an explorer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreOutcome {
	/// `true` when the user accepted the current selection.
	pub accepted: bool,
	/// Query text at exit.
	pub query: String,
	pub selection: Option<Problem>,
}
