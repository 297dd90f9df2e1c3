use super::types::{Theme, ThemeDefinition};

pub mod light;
pub mod midnight;

pub use light::LIGHT;
pub use midnight::MIDNIGHT;

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] =
	&[midnight::DEFINITION, light::DEFINITION];

#[must_use]
pub fn default_theme() -> Theme {
	MIDNIGHT
}
