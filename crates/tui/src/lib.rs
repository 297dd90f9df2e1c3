//! Terminal widgets for `leetex`.
//!
//! Everything here is presentation: themes, the query input, result tables,
//! code and text panels, and the skeleton placeholders shown while a request
//! is in flight. Widgets read state handed to them and never issue requests.

pub mod components;
pub mod input;
pub mod style;


pub use crate::input::SearchInput;
pub use crate::style::{Theme, by_name, default_theme, names};
