use crate::error::RequestError;
use crate::types::Problem;

/// Backend operations the explorer depends on.
///
/// Calls are blocking; the UI runs them on worker threads.
pub trait ProblemService: Send + Sync {
	/// Fetch one page of problems matching `query`, starting at `offset`.
	fn search(&self, query: &str, offset: usize) -> Result<Vec<Problem>, RequestError>;

	/// Ask the backend to generate a fresh solution for `problem_id`.
	///
	/// The returned string is the raw fenced payload; see
	/// [`GeneratedSolution::parse`](crate::GeneratedSolution::parse).
	fn generate(&self, problem_id: u64) -> Result<String, RequestError>;
}
