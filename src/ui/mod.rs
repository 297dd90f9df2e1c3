//! Interactive terminal UI orchestration for `leetex`.
//!
//! [`ExplorerUi`] configures an [`App`]; the remaining submodules implement
//! the event loop, key handling, request plumbing and rendering.

mod actions;
mod builder;
mod outcome;
mod render;
mod requests;
mod runtime;
mod state;
#[cfg(test)]
mod tests;

pub use builder::ExplorerUi;
pub use outcome::ExploreOutcome;
pub use runtime::run;
pub use state::{App, DetailPanel, Focus};
