use std::fmt;

use serde::{Deserialize, Serialize};

use super::language::ReferenceLanguage;

/// Prefix for the canonical external page of a problem.
pub const PROBLEM_URL_BASE: &str = "https://leetcode.com/problems/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
	Easy,
	Medium,
	Hard,
}

impl Difficulty {
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Easy => "Easy",
			Self::Medium => "Medium",
			Self::Hard => "Hard",
		}
	}
}

impl fmt::Display for Difficulty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A problem record as returned by `filter_solutions`.
///
/// Records are immutable once fetched. Reference solutions are stored as the
/// backend sends them: fenced Markdown code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
	pub problem_id: u64,
	pub title: String,
	pub difficulty: Difficulty,
	pub slug: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub java: String,
	#[serde(default)]
	pub javascript: String,
	#[serde(default)]
	pub python: String,
	#[serde(default)]
	pub cplusplus: String,
}

impl Problem {
	/// Create a record with empty content and no reference solutions.
	pub fn new(problem_id: u64, title: impl Into<String>, difficulty: Difficulty) -> Self {
		let title = title.into();
		let slug = slugify(&title);
		Self {
			problem_id,
			title,
			difficulty,
			slug,
			content: String::new(),
			java: String::new(),
			javascript: String::new(),
			python: String::new(),
			cplusplus: String::new(),
		}
	}

	#[must_use]
	pub fn with_content(mut self, content: impl Into<String>) -> Self {
		self.content = content.into();
		self
	}

	#[must_use]
	pub fn with_solution(mut self, language: ReferenceLanguage, text: impl Into<String>) -> Self {
		*self.solution_slot(language) = text.into();
		self
	}

	/// Raw reference solution text for `language`.
	#[must_use]
	pub fn reference_solution(&self, language: ReferenceLanguage) -> &str {
		match language {
			ReferenceLanguage::Java => &self.java,
			ReferenceLanguage::JavaScript => &self.javascript,
			ReferenceLanguage::Python => &self.python,
			ReferenceLanguage::Cpp => &self.cplusplus,
		}
	}

	#[must_use]
	pub fn url(&self) -> String {
		format!("{PROBLEM_URL_BASE}{}", self.slug)
	}

	fn solution_slot(&mut self, language: ReferenceLanguage) -> &mut String {
		match language {
			ReferenceLanguage::Java => &mut self.java,
			ReferenceLanguage::JavaScript => &mut self.javascript,
			ReferenceLanguage::Python => &mut self.python,
			ReferenceLanguage::Cpp => &mut self.cplusplus,
		}
	}
}

fn slugify(title: &str) -> String {
	title
		.split(|c: char| !c.is_ascii_alphanumeric())
		.filter(|part| !part.is_empty())
		.map(str::to_ascii_lowercase)
		.collect::<Vec<_>>()
		.join("-")
}
