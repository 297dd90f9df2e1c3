use crate::error::RequestError;

/// Identifier correlating a response with the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RequestId(u64);

impl RequestId {
	#[must_use]
	pub const fn new(id: u64) -> Self {
		Self(id)
	}

	#[must_use]
	pub const fn get(self) -> u64 {
		self.0
	}
}

/// Lifecycle of one kind of request.
///
/// Only a response carrying the id of the request currently in flight may
/// move a `Loading` state forward; anything else is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Load<T> {
	Idle,
	Loading(RequestId),
	Loaded(RequestId, T),
	Failed(RequestId, RequestError),
}

impl<T> Default for Load<T> {
	fn default() -> Self {
		Self::Idle
	}
}

impl<T> Load<T> {
	#[must_use]
	pub fn is_idle(&self) -> bool {
		matches!(self, Self::Idle)
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading(_))
	}

	/// Id of the request in flight, if any.
	#[must_use]
	pub fn pending_id(&self) -> Option<RequestId> {
		match self {
			Self::Loading(id) => Some(*id),
			_ => None,
		}
	}

	#[must_use]
	pub fn value(&self) -> Option<&T> {
		match self {
			Self::Loaded(_, value) => Some(value),
			_ => None,
		}
	}

	#[must_use]
	pub fn error(&self) -> Option<&RequestError> {
		match self {
			Self::Failed(_, err) => Some(err),
			_ => None,
		}
	}

	/// Apply the outcome of request `id`.
	///
	/// Returns `false` and leaves the state untouched when `id` is not the
	/// request currently in flight.
	pub fn resolve(&mut self, id: RequestId, outcome: Result<T, RequestError>) -> bool {
		if self.pending_id() != Some(id) {
			return false;
		}
		*self = match outcome {
			Ok(value) => Self::Loaded(id, value),
			Err(err) => Self::Failed(id, err),
		};
		true
	}
}
