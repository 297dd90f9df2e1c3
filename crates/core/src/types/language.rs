use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language every generated solution is written in.
pub const GENERATION_LANGUAGE: &str = "Haskell";

/// Languages that ship with a reference solution on every problem record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceLanguage {
	#[default]
	Java,
	JavaScript,
	Python,
	#[serde(rename = "cplusplus", alias = "cpp", alias = "c++")]
	Cpp,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown reference language '{0}' (expected java, javascript, python or cplusplus)")]
pub struct UnknownLanguage(pub String);

impl ReferenceLanguage {
	/// All languages in selector order.
	pub const ALL: [Self; 4] = [Self::Java, Self::JavaScript, Self::Python, Self::Cpp];

	/// Field name used by the search backend.
	#[must_use]
	pub const fn key(self) -> &'static str {
		match self {
			Self::Java => "java",
			Self::JavaScript => "javascript",
			Self::Python => "python",
			Self::Cpp => "cplusplus",
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Java => "Java",
			Self::JavaScript => "JavaScript",
			Self::Python => "Python",
			Self::Cpp => "C++",
		}
	}

	/// Position of the language in [`Self::ALL`].
	#[must_use]
	pub fn index(self) -> usize {
		Self::ALL
			.iter()
			.position(|language| *language == self)
			.unwrap_or(0)
	}

	#[must_use]
	pub fn from_index(index: usize) -> Option<Self> {
		Self::ALL.get(index).copied()
	}

	/// The next language in selector order, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}
}

impl fmt::Display for ReferenceLanguage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for ReferenceLanguage {
	type Err = UnknownLanguage;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"java" => Ok(Self::Java),
			"javascript" | "js" => Ok(Self::JavaScript),
			"python" | "py" => Ok(Self::Python),
			"cplusplus" | "cpp" | "c++" => Ok(Self::Cpp),
			_ => Err(UnknownLanguage(value.to_string())),
		}
	}
}
