//! Parsing of fenced solution payloads.
//!
//! Generated payloads look like
//!
//! ~~~text
//! ```haskell
//! solve = ...
//! ```
//! - explanation bullet points
//! ~~~
//!
//! Splitting on the fence delimiter gives a leading segment (ignored), the
//! code segment whose first line is a language tag, and one or more trailing
//! segments. The last non-blank trailing segment is the explanation; anything
//! between the code block and it is discarded.

use crate::error::PayloadError;

/// Delimiter separating fenced segments.
pub const FENCE: &str = "```";

/// A generated solution split into its displayable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSolution {
	pub code: String,
	pub explanation: String,
}

impl GeneratedSolution {
	pub fn parse(payload: &str) -> Result<Self, PayloadError> {
		let segments: Vec<&str> = payload.split(FENCE).collect();
		let [_, code, trailing @ ..] = segments.as_slice() else {
			return Err(PayloadError::TooFewSegments {
				found: segments.len(),
			});
		};
		if trailing.is_empty() {
			return Err(PayloadError::TooFewSegments {
				found: segments.len(),
			});
		}

		let code = code_body(code)?;
		let explanation = trailing
			.iter()
			.rev()
			.map(|segment| segment.trim())
			.find(|segment| !segment.is_empty())
			.ok_or(PayloadError::MissingExplanation)?;

		Ok(Self {
			code,
			explanation: explanation.to_string(),
		})
	}
}

/// Extract the code from the first fenced block of `text`.
///
/// Reference solutions use the same fencing as generated payloads but carry
/// no explanation, so only the code segment is required.
pub fn extract_code(text: &str) -> Result<String, PayloadError> {
	let mut segments = text.split(FENCE);
	segments.next();
	let code = segments
		.next()
		.ok_or(PayloadError::TooFewSegments { found: 1 })?;
	code_body(code)
}

/// Drop the language tag line from a code segment.
fn code_body(segment: &str) -> Result<String, PayloadError> {
	let (_tag, code) = segment
		.trim()
		.split_once('\n')
		.ok_or(PayloadError::MissingHeaderLine)?;
	Ok(code.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extracts_code_and_explanation_around_discarded_middle() {
		let payload = "```lang\ncodeA\ncodeB\n```\nmiddle\n```\nexplanation text\n```";
		let parsed = GeneratedSolution::parse(payload).expect("well formed");
		assert_eq!(parsed.code, "codeA\ncodeB");
		assert_eq!(parsed.explanation, "explanation text");
	}

	#[test]
	fn explanation_may_follow_the_closing_fence_directly() {
		let payload = "```haskell\nmain :: IO ()\nmain = pure ()\n```\n- Uses a fold\n- Runs in O(n)";
		let parsed = GeneratedSolution::parse(payload).expect("well formed");
		assert_eq!(parsed.code, "main :: IO ()\nmain = pure ()");
		assert_eq!(parsed.explanation, "- Uses a fold\n- Runs in O(n)");
	}

	#[test]
	fn single_fenced_segment_is_malformed() {
		let payload = "```haskell\nmain = pure ()\n```";
		assert_eq!(
			GeneratedSolution::parse(payload),
			Err(PayloadError::MissingExplanation)
		);
	}

	#[test]
	fn unfenced_text_is_malformed() {
		assert_eq!(
			GeneratedSolution::parse("just some prose"),
			Err(PayloadError::TooFewSegments { found: 1 })
		);
		assert_eq!(
			GeneratedSolution::parse("```haskell\nmain = pure ()"),
			Err(PayloadError::TooFewSegments { found: 2 })
		);
	}

	#[test]
	fn code_segment_without_header_line_is_malformed() {
		assert_eq!(
			GeneratedSolution::parse("```main = pure ()```\nexplained"),
			Err(PayloadError::MissingHeaderLine)
		);
	}

	#[test]
	fn extract_code_reads_reference_solutions() {
		let text = "```java\nclass Solution {\n    int x;\n}\n```";
		assert_eq!(
			extract_code(text).as_deref(),
			Ok("class Solution {\n    int x;\n}")
		);
		assert_eq!(
			extract_code("no fences here"),
			Err(PayloadError::TooFewSegments { found: 1 })
		);
	}

	#[test]
	fn errors_convert_into_malformed_request_errors() {
		let err: crate::RequestError = PayloadError::MissingExplanation.into();
		assert!(matches!(err, crate::RequestError::MalformedPayload(_)));
		assert!(!err.is_retryable());
	}
}
