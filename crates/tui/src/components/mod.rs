//! UI building blocks shared by the explorer screens.

/// Code viewer with a line-number gutter.
pub mod code;
/// Bordered panels and inline status messages.
pub mod panel;
/// Query row with the in-flight indicator.
pub mod prompt;
/// Search result table and pagination footer.
pub mod results;
/// Placeholders shown while a request is in flight.
pub mod skeleton;
/// Language selector tabs.
pub mod tabs;

pub use code::{numbered_lines, render_code};
pub use panel::{panel_block, render_message, render_scrolled, render_text};
pub use prompt::{InputContext, ProgressState, render_prompt};
pub use results::{PaginationView, ResultsView, render_pagination, render_results};
pub use skeleton::{
	RESULT_SKELETON_ROWS, render_code_spinner, render_results_skeleton, render_text_skeleton,
};
pub use tabs::render_language_tabs;
