use leetex_core::{Effect, RequestId};

/// Commands understood by a background request worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RequestCommand {
	/// Fetch one page of search results.
	Search {
		/// Identifier that lets the explorer correlate the response.
		id: RequestId,
		query: String,
		offset: usize,
	},
	/// Ask the backend for a generated solution.
	Generate { id: RequestId, problem_id: u64 },
}

impl RequestCommand {
	pub(crate) fn id(&self) -> RequestId {
		match self {
			Self::Search { id, .. } | Self::Generate { id, .. } => *id,
		}
	}
}

impl From<Effect> for RequestCommand {
	fn from(effect: Effect) -> Self {
		match effect {
			Effect::Search { id, query, offset } => Self::Search { id, query, offset },
			Effect::Generate { id, problem_id } => Self::Generate { id, problem_id },
		}
	}
}
