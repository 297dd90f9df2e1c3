use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use leetex_core::{
	Difficulty, Load, PAGE_SIZE, Problem, ProblemService, ReferenceLanguage, RequestError,
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use super::{App, DetailPanel, ExplorerUi, Focus};

/// In-memory backend: `graph` finds five problems, `long` finds one with a
/// lengthy reference solution, `down` fails, anything else finds nothing.
#[derive(Default)]
struct FakeService {
	searches: AtomicUsize,
	generations: AtomicUsize,
}

impl ProblemService for FakeService {
	fn search(&self, query: &str, offset: usize) -> Result<Vec<Problem>, RequestError> {
		self.searches.fetch_add(1, Ordering::SeqCst);
		match query {
			"graph" if offset == 0 => Ok(graph_problems()),
			"long" => Ok(vec![long_problem()]),
			"down" => Err(RequestError::Network("connection refused".into())),
			_ => Ok(Vec::new()),
		}
	}

	fn generate(&self, problem_id: u64) -> Result<String, RequestError> {
		self.generations.fetch_add(1, Ordering::SeqCst);
		Ok(format!(
			"```haskell\nsolve = {problem_id}\n```\nFold over the adjacency list for {problem_id}."
		))
	}
}

fn graph_problems() -> Vec<Problem> {
	vec![
		Problem::new(133, "Clone Graph", Difficulty::Medium)
			.with_content("Given a reference of a node in a connected undirected graph.")
			.with_solution(ReferenceLanguage::Java, "```java\nclass Solution {}\n```"),
		Problem::new(207, "Course Schedule", Difficulty::Medium),
		Problem::new(261, "Graph Valid Tree", Difficulty::Medium),
		Problem::new(785, "Is Graph Bipartite?", Difficulty::Medium),
		Problem::new(997, "Find the Town Judge", Difficulty::Easy),
	]
}

fn long_problem() -> Problem {
	let body: Vec<String> = (1..=80).map(|n| format!("int v{n:02} = {n};")).collect();
	Problem::new(42, "Trapping Rain Water", Difficulty::Hard).with_solution(
		ReferenceLanguage::Java,
		format!("```java\n{}\n```", body.join("\n")),
	)
}

fn app_with(service: &Arc<FakeService>) -> App<'static> {
	ExplorerUi::new(Arc::clone(service) as Arc<dyn ProblemService>).into_app()
}

pub(super) fn press(app: &mut App, code: KeyCode) -> Option<super::ExploreOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub(super) fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

pub(super) fn wait_until(app: &mut App, done: impl Fn(&App) -> bool) {
	let deadline = Instant::now() + Duration::from_secs(2);
	while !done(app) && Instant::now() < deadline {
		thread::sleep(Duration::from_millis(5));
		app.pump_responses();
	}
	assert!(done(app), "timed out waiting for responses");
}

pub(super) fn search(app: &mut App, query: &str) {
	type_text(app, query);
	press(app, KeyCode::Enter);
	wait_until(app, |app| !app.explorer().results().is_loading());
}

fn screen(app: &mut App) -> String {
	let mut terminal = Terminal::new(TestBackend::new(160, 40)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	let buffer = terminal.backend().buffer();
	let width = buffer.area.width;
	buffer
		.content()
		.chunks(usize::from(width))
		.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

#[test]
fn first_frame_invites_a_search() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	let view = screen(&mut app);
	assert!(view.contains("Type a keyword and press Enter"));
	assert!(view.contains("Select a problem"));
	assert_eq!(service.searches.load(Ordering::SeqCst), 0);
}

#[test]
fn enter_searches_and_moves_focus_to_results() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "graph");

	assert_eq!(app.focus(), Focus::Results);
	assert_eq!(app.table_state.selected(), Some(0));
	let view = screen(&mut app);
	assert!(view.contains("Clone Graph"));
	assert!(view.contains("Find the Town Judge"));
	assert!(view.contains("Showing 1 - 5"));
	assert!(view.contains("5 results"));
}

#[test]
fn blank_query_does_not_search() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	type_text(&mut app, "   ");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.focus(), Focus::Search);
	assert!(app.explorer().results().is_idle());
}

#[test]
fn skeleton_is_drawn_until_results_are_pumped() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	type_text(&mut app, "graph");
	press(&mut app, KeyCode::Enter);

	assert!(app.explorer().results().is_loading());
	let view = screen(&mut app);
	assert!(view.contains('▒'));
	assert!(view.contains("Searching"));
}

#[test]
fn empty_result_set_renders_no_results() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "zzz");
	assert!(screen(&mut app).contains("No results"));
}

#[test]
fn selecting_shows_reference_generated_and_explanation_panels() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "graph");

	press(&mut app, KeyCode::Enter);
	assert!(app.explorer().generated().is_loading());
	let loading = screen(&mut app);
	assert!(loading.contains("Generating"));

	wait_until(&mut app, |app| !app.explorer().generated().is_loading());
	let view = screen(&mut app);
	assert!(view.contains("#133 Clone Graph"));
	assert!(view.contains("class Solution {}"));
	assert!(view.contains("Haskell"));
	assert!(view.contains("solve = 133"));
	assert!(view.contains("Fold over the adjacency list for 133."));
	assert!(view.contains("Given a reference of a node"));
}

#[test]
fn language_keys_switch_reference_without_requests() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "graph");
	press(&mut app, KeyCode::Enter);
	wait_until(&mut app, |app| !app.explorer().generated().is_loading());

	press(&mut app, KeyCode::Char('2'));
	assert_eq!(app.explorer().language(), ReferenceLanguage::JavaScript);
	assert!(screen(&mut app).contains("No JavaScript solution for this problem"));
	press(&mut app, KeyCode::Char('l'));
	assert_eq!(app.explorer().language(), ReferenceLanguage::Python);

	assert_eq!(service.searches.load(Ordering::SeqCst), 1);
	assert_eq!(service.generations.load(Ordering::SeqCst), 1);
}

#[test]
fn scroll_keys_reveal_the_end_of_a_long_reference() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "long");
	press(&mut app, KeyCode::Enter);
	wait_until(&mut app, |app| !app.explorer().generated().is_loading());

	let top = screen(&mut app);
	assert!(top.contains("int v01 = 1;"));
	assert!(!top.contains("int v80 = 80;"));

	for _ in 0..10 {
		press(&mut app, KeyCode::Char('d'));
	}
	let bottom = screen(&mut app);
	assert!(bottom.contains("int v80 = 80;"));
	assert!(!bottom.contains("int v01 = 1;"));

	// Drawing clamps the offset, so one step up moves off the last line.
	let clamped = app.scroll_offset(DetailPanel::Reference);
	assert!(clamped > 0 && clamped < 80);
	press(&mut app, KeyCode::Char('k'));
	assert_eq!(app.scroll_offset(DetailPanel::Reference), clamped - 1);
	assert!(!screen(&mut app).contains("int v80 = 80;"));
}

#[test]
fn shift_arrows_scroll_without_moving_the_cursor() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "long");
	press(&mut app, KeyCode::Enter);

	app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));
	app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));
	assert_eq!(app.scroll_offset(DetailPanel::Reference), 2);
	app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT));
	assert_eq!(app.scroll_offset(DetailPanel::Reference), 1);
	assert_eq!(app.table_state.selected(), Some(0));
}

#[test]
fn selection_and_language_changes_reset_scrolling() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "long");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Char('d'));
	assert_eq!(app.scroll_offset(DetailPanel::Reference), 10);

	press(&mut app, KeyCode::Enter);
	assert_eq!(app.scroll_offset(DetailPanel::Reference), 0);

	press(&mut app, KeyCode::Char('v'));
	assert_eq!(app.scroll_target(), DetailPanel::Generated);
	press(&mut app, KeyCode::Char('j'));
	assert_eq!(app.scroll_offset(DetailPanel::Generated), 1);
	assert_eq!(app.scroll_offset(DetailPanel::Reference), 0);

	press(&mut app, KeyCode::Char('v'));
	press(&mut app, KeyCode::Char('v'));
	press(&mut app, KeyCode::Char('v'));
	press(&mut app, KeyCode::Char('d'));
	assert_eq!(app.scroll_offset(DetailPanel::Reference), 10);
	press(&mut app, KeyCode::Char('l'));
	assert_eq!(app.scroll_offset(DetailPanel::Reference), 0);
	assert_eq!(app.scroll_offset(DetailPanel::Generated), 1);
}

#[test]
fn paging_requests_the_next_offset() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "graph");

	press(&mut app, KeyCode::Char('n'));
	assert_eq!(app.explorer().pagination().offset(), PAGE_SIZE);
	wait_until(&mut app, |app| !app.explorer().results().is_loading());
	assert_eq!(app.explorer().results().value().map(Vec::len), Some(0));
	assert_eq!(app.table_state.selected(), None);

	press(&mut app, KeyCode::Char('g'));
	wait_until(&mut app, |app| !app.explorer().results().is_loading());
	assert_eq!(app.explorer().pagination().offset(), 0);
	assert_eq!(service.searches.load(Ordering::SeqCst), 3);
}

#[test]
fn failed_search_offers_retry() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "down");

	assert!(matches!(
		app.explorer().results(),
		Load::Failed(_, RequestError::Network(_))
	));
	assert!(screen(&mut app).contains("press r to retry"));

	press(&mut app, KeyCode::Char('r'));
	assert!(app.explorer().results().is_loading());
	wait_until(&mut app, |app| !app.explorer().results().is_loading());
	assert_eq!(service.searches.load(Ordering::SeqCst), 2);
}

#[test]
fn accepting_returns_the_selected_problem() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "graph");
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);

	let outcome = press(&mut app, KeyCode::Char('o')).expect("outcome");
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "graph");
	assert_eq!(outcome.selection.map(|problem| problem.problem_id), Some(207));
}

#[test]
fn escape_cancels_from_either_focus() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	type_text(&mut app, "tree");
	let outcome = press(&mut app, KeyCode::Esc).expect("outcome");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "tree");
	assert!(outcome.selection.is_none());

	press(&mut app, KeyCode::Tab);
	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
		.expect("outcome");
	assert!(!outcome.accepted);
}

#[test]
fn slash_returns_focus_to_the_search_box() {
	let service = Arc::new(FakeService::default());
	let mut app = app_with(&service);
	search(&mut app, "graph");
	press(&mut app, KeyCode::Char('/'));
	assert_eq!(app.focus(), Focus::Search);
	type_text(&mut app, "s");
	assert_eq!(app.explorer().query(), "graphs");
}

#[test]
fn initial_query_searches_on_start() {
	let service = Arc::new(FakeService::default());
	let mut app = ExplorerUi::new(Arc::clone(&service) as Arc<dyn ProblemService>)
		.with_initial_query("graph")
		.with_language(ReferenceLanguage::Python)
		.with_theme_name("light")
		.into_app();
	app.start();
	wait_until(&mut app, |app| !app.explorer().results().is_loading());

	assert_eq!(app.focus(), Focus::Results);
	assert_eq!(app.explorer().language(), ReferenceLanguage::Python);
	assert_eq!(app.explorer().results().value().map(Vec::len), Some(5));
}
