//! Core types for the `leetex` problem explorer.
//!
//! This crate knows nothing about terminals or HTTP. It defines the problem
//! records returned by the search backend, the grammar used to pick apart
//! generated solutions, and the [`Explorer`] state machine that turns user
//! actions into request effects.

pub mod error;
pub mod explorer;
pub mod payload;
pub mod service;
pub mod types;

pub use error::{PayloadError, RequestError};
pub use explorer::{
	Action, Effect, Explorer, Load, PAGE_SIZE, PageMove, Pagination, ReferenceSolution, RequestId,
};
pub use payload::{GeneratedSolution, extract_code};
pub use service::ProblemService;
pub use types::{
	Difficulty, GENERATION_LANGUAGE, PROBLEM_URL_BASE, Problem, ReferenceLanguage,
	UnknownLanguage,
};
