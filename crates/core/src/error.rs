use thiserror::Error;

/// Ways a fenced payload can violate the generated-solution grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
	#[error("expected at least 3 fence-delimited segments, found {found}")]
	TooFewSegments { found: usize },
	#[error("code block is missing its language header line")]
	MissingHeaderLine,
	#[error("no explanation follows the code block")]
	MissingExplanation,
}

/// Failure of a search or generation request as seen by the explorer.
///
/// Errors are stored inside the view state, so they are cheap to clone and
/// carry rendered messages rather than the transport error itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
	/// The call did not complete: connection failure, timeout, or an
	/// unexpected status code.
	#[error("network error: {0}")]
	Network(String),
	/// The response arrived but did not have the expected shape.
	#[error("could not parse response: {0}")]
	MalformedPayload(String),
	/// The backend reported that the requested item does not exist.
	#[error("{0}")]
	NotFound(String),
}

impl RequestError {
	/// Whether re-issuing the same request could plausibly succeed.
	#[must_use]
	pub fn is_retryable(&self) -> bool {
		matches!(self, Self::Network(_))
	}
}

impl From<PayloadError> for RequestError {
	fn from(err: PayloadError) -> Self {
		Self::MalformedPayload(err.to_string())
	}
}
