mod language;
mod problem;

pub use language::{GENERATION_LANGUAGE, ReferenceLanguage, UnknownLanguage};
pub use problem::{Difficulty, PROBLEM_URL_BASE, Problem};
