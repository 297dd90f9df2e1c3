//! Terminal explorer for coding-interview problems.
//!
//! The library wires the [`leetex_core::Explorer`] state machine to a
//! blocking HTTP backend and a `ratatui` front end. Embedders build an
//! [`ExplorerUi`], hand it a [`ProblemService`](leetex_core::ProblemService)
//! and run it to completion.

pub mod app_dirs;
pub mod client;
pub mod logging;
mod systems;
pub mod ui;

pub use client::{ClientOptions, HttpProblemService};
pub use ui::{App, ExploreOutcome, ExplorerUi, run};
