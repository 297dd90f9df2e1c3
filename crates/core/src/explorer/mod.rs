//! View state for the problem explorer.
//!
//! [`Explorer`] owns every piece of mutable view state and is driven only
//! through [`Explorer::apply`]. User input and request completions are both
//! [`Action`]s; anything that needs the outside world comes back as an
//! [`Effect`] for the caller to execute. Rendering reads the state through
//! accessors and never mutates it.

mod load;
mod pagination;

pub use load::{Load, RequestId};
pub use pagination::{PAGE_SIZE, PageMove, Pagination};

use crate::error::{PayloadError, RequestError};
use crate::payload::{GeneratedSolution, extract_code};
use crate::types::{Problem, ReferenceLanguage};

/// Everything that can change the explorer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Replace the query text without searching.
	EditQuery(String),
	/// Search for the current query text.
	SubmitQuery,
	Page(PageMove),
	/// Select the result at this index of the current page.
	Select(usize),
	SetLanguage(ReferenceLanguage),
	CycleLanguage,
	/// Re-issue whichever requests failed.
	Retry,
	SearchCompleted {
		id: RequestId,
		result: Result<Vec<Problem>, RequestError>,
	},
	GenerationCompleted {
		id: RequestId,
		result: Result<String, RequestError>,
	},
}

/// Requests the caller must perform on behalf of the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	Search {
		id: RequestId,
		query: String,
		offset: usize,
	},
	Generate {
		id: RequestId,
		problem_id: u64,
	},
}

/// How the reference panel should present the selected language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSolution {
	/// The record has no solution in this language.
	Missing,
	Code(String),
	Malformed(PayloadError),
}

#[derive(Debug, Clone, Default)]
pub struct Explorer {
	query: String,
	last_searched: Option<String>,
	pagination: Pagination,
	results: Load<Vec<Problem>>,
	selected: Option<Problem>,
	language: ReferenceLanguage,
	generated: Load<GeneratedSolution>,
	next_request_id: u64,
}

impl Explorer {
	#[must_use]
	pub fn new(language: ReferenceLanguage) -> Self {
		Self {
			language,
			..Self::default()
		}
	}

	/// Apply `action` and return the requests it triggers.
	pub fn apply(&mut self, action: Action) -> Vec<Effect> {
		match action {
			Action::EditQuery(query) => {
				self.query = query;
				Vec::new()
			}
			Action::SubmitQuery => self.submit_query().into_iter().collect(),
			Action::Page(movement) => self.move_page(movement).into_iter().collect(),
			Action::Select(index) => self.select(index).into_iter().collect(),
			Action::SetLanguage(language) => {
				self.language = language;
				Vec::new()
			}
			Action::CycleLanguage => {
				self.language = self.language.next();
				Vec::new()
			}
			Action::Retry => self.retry(),
			Action::SearchCompleted { id, result } => {
				self.complete_search(id, result);
				Vec::new()
			}
			Action::GenerationCompleted { id, result } => {
				self.complete_generation(id, result);
				Vec::new()
			}
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn pagination(&self) -> Pagination {
		self.pagination
	}

	#[must_use]
	pub fn results(&self) -> &Load<Vec<Problem>> {
		&self.results
	}

	#[must_use]
	pub fn selected(&self) -> Option<&Problem> {
		self.selected.as_ref()
	}

	#[must_use]
	pub fn language(&self) -> ReferenceLanguage {
		self.language
	}

	#[must_use]
	pub fn generated(&self) -> &Load<GeneratedSolution> {
		&self.generated
	}

	/// Whether `problem` is the current selection.
	#[must_use]
	pub fn is_selected(&self, problem: &Problem) -> bool {
		self.selected
			.as_ref()
			.is_some_and(|selected| selected.problem_id == problem.problem_id)
	}

	/// Reference solution of the selection in the chosen language.
	#[must_use]
	pub fn reference_solution(&self) -> Option<ReferenceSolution> {
		let problem = self.selected.as_ref()?;
		let text = problem.reference_solution(self.language);
		if text.trim().is_empty() {
			return Some(ReferenceSolution::Missing);
		}
		Some(match extract_code(text) {
			Ok(code) => ReferenceSolution::Code(code),
			Err(err) => ReferenceSolution::Malformed(err),
		})
	}

	fn submit_query(&mut self) -> Option<Effect> {
		let query = self.query.trim().to_string();
		if query.is_empty() {
			return None;
		}
		if self.last_searched.as_deref() != Some(query.as_str()) {
			self.pagination = Pagination::default();
		}
		Some(self.issue_search(query))
	}

	fn move_page(&mut self, movement: PageMove) -> Option<Effect> {
		let moved = self.pagination.moved(movement);
		if moved == self.pagination {
			return None;
		}
		self.pagination = moved;
		let query = self.query.trim().to_string();
		if query.is_empty() {
			return None;
		}
		Some(self.issue_search(query))
	}

	fn select(&mut self, index: usize) -> Option<Effect> {
		let problem = self.results.value()?.get(index)?.clone();
		let problem_id = problem.problem_id;
		tracing::debug!(problem_id, title = %problem.title, "problem selected");
		self.selected = Some(problem);
		Some(self.issue_generation(problem_id))
	}

	fn retry(&mut self) -> Vec<Effect> {
		let mut effects = Vec::new();
		if matches!(self.results, Load::Failed(..))
			&& let Some(query) = self.last_searched.clone()
		{
			effects.push(self.issue_search(query));
		}
		if matches!(self.generated, Load::Failed(..))
			&& let Some(problem_id) = self.selected.as_ref().map(|problem| problem.problem_id)
		{
			effects.push(self.issue_generation(problem_id));
		}
		effects
	}

	fn issue_search(&mut self, query: String) -> Effect {
		let id = self.allocate_id();
		let offset = self.pagination.offset();
		self.results = Load::Loading(id);
		self.last_searched = Some(query.clone());
		tracing::debug!(request = id.get(), %query, offset, "issuing search");
		Effect::Search { id, query, offset }
	}

	fn issue_generation(&mut self, problem_id: u64) -> Effect {
		let id = self.allocate_id();
		self.generated = Load::Loading(id);
		tracing::debug!(request = id.get(), problem_id, "issuing generation");
		Effect::Generate { id, problem_id }
	}

	fn complete_search(&mut self, id: RequestId, result: Result<Vec<Problem>, RequestError>) {
		let result = result.map(|mut problems| {
			problems.truncate(PAGE_SIZE);
			problems
		});
		if !self.results.resolve(id, result) {
			tracing::debug!(request = id.get(), "discarding stale search response");
		}
	}

	fn complete_generation(&mut self, id: RequestId, result: Result<String, RequestError>) {
		if self.generated.pending_id() != Some(id) {
			tracing::debug!(request = id.get(), "discarding stale generation response");
			return;
		}
		let result = result.and_then(|payload| {
			GeneratedSolution::parse(&payload).map_err(|err| {
				tracing::warn!(request = id.get(), error = %err, "malformed generation payload");
				RequestError::from(err)
			})
		});
		self.generated.resolve(id, result);
	}

	fn allocate_id(&mut self) -> RequestId {
		self.next_request_id = self.next_request_id.wrapping_add(1);
		RequestId::new(self.next_request_id)
	}
}
