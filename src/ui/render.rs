use leetex_core::{
	GENERATION_LANGUAGE, Load, Problem, ReferenceLanguage, ReferenceSolution, RequestError,
};
use leetex_tui::components::{
	InputContext, PaginationView, ProgressState, ResultsView, panel_block, render_code,
	render_code_spinner, render_language_tabs, render_message, render_pagination, render_prompt,
	render_results, render_results_skeleton, render_scrolled, render_text, render_text_skeleton,
};
use ratatui::{
	Frame,
	layout::{Constraint, Layout, Margin, Rect},
	style::Modifier,
	text::{Line, Span, Text},
	widgets::{Block, Paragraph, Wrap},
};

use super::{App, DetailPanel, Focus};

const APP_TITLE: &str = "leetex";
const BLURB: &str = "Search interview problems and generate Haskell solutions on demand.";
const PROMPT_TITLE: &str = "Search";
const IDLE_HINT: &str = "Type a keyword and press Enter";
const CALL_TO_ACTION: &str =
	"Select a problem to see its reference solution next to a freshly generated Haskell one.";
const RETRY_HINT: &str = "press r to retry";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [sidebar, detail] =
			Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

		self.draw_sidebar(frame, sidebar);
		self.draw_detail(frame, detail);
	}

	fn draw_sidebar(&mut self, frame: &mut Frame, area: Rect) {
		let [header, search, results, footer] = Layout::vertical([
			Constraint::Length(2),
			Constraint::Length(3),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		let heading = vec![
			Line::styled(
				APP_TITLE,
				self.theme.header_style().add_modifier(Modifier::BOLD),
			),
			Line::styled(BLURB, self.theme.empty_style()),
		];
		frame.render_widget(Paragraph::new(heading), header);

		let block = panel_block(" Query ", &self.theme, self.focus == Focus::Search);
		let input_area = block.inner(search);
		frame.render_widget(block, search);
		let (progress_text, loading) = self.search_status();
		render_prompt(
			frame,
			InputContext {
				search_input: &self.search_input,
				title: PROMPT_TITLE,
				area: input_area,
				theme: &self.theme,
			},
			ProgressState {
				progress_text: &progress_text,
				loading,
				throbber_state: &self.throbber_state,
			},
		);

		self.draw_results(frame, results);
		self.draw_pagination(frame, footer);
	}

	fn search_status(&self) -> (String, bool) {
		match self.explorer.results() {
			Load::Idle => (String::new(), false),
			Load::Loading(_) => ("Searching".to_string(), true),
			Load::Loaded(_, problems) if problems.len() == 1 => ("1 result".to_string(), false),
			Load::Loaded(_, problems) => (format!("{} results", problems.len()), false),
			Load::Failed(..) => ("Search failed".to_string(), false),
		}
	}

	fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
		let focused = self.focus == Focus::Results;
		let block = panel_block(" Problems ", &self.theme, focused);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		match self.explorer.results() {
			Load::Idle => render_message(frame, inner, IDLE_HINT, self.theme.empty_style()),
			Load::Loading(_) => render_results_skeleton(frame, inner, &self.theme),
			Load::Failed(_, err) => {
				render_message(frame, inner, &failure_message(err), self.theme.error_style());
			}
			Load::Loaded(_, problems) if problems.is_empty() => {
				render_message(frame, inner, "No results", self.theme.empty_style());
			}
			Load::Loaded(_, problems) => {
				let view = ResultsView {
					problems,
					selected_id: self.explorer.selected().map(|problem| problem.problem_id),
					focused,
				};
				render_results(frame, inner, &mut self.table_state, view, &self.theme);
			}
		}
	}

	fn draw_pagination(&self, frame: &mut Frame, area: Rect) {
		let Some(problems) = self.explorer.results().value() else {
			return;
		};
		let pagination = self.explorer.pagination();
		let view = PaginationView {
			range: pagination.display_range(problems.len()),
			can_retreat: !pagination.is_first(),
		};
		render_pagination(frame, area, view, &self.theme);
	}

	pub(super) fn draw_detail(&mut self, frame: &mut Frame, area: Rect) {
		let Some(problem) = self.explorer.selected().cloned() else {
			let block = panel_block(" Solutions ", &self.theme, false);
			let inner = block.inner(area);
			frame.render_widget(block, area);
			render_message(frame, inner, CALL_TO_ACTION, self.theme.empty_style());
			return;
		};

		let [top, bottom] =
			Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);
		let [reference, generated] =
			Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);
		let [description, explanation] =
			Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
				.areas(bottom);

		self.draw_reference(frame, reference);
		self.draw_generated(frame, generated);
		self.draw_description(frame, description, &problem);
		self.draw_explanation(frame, explanation);
	}

	/// Whether scroll keys currently move `panel`.
	fn is_scroll_target(&self, panel: DetailPanel) -> bool {
		self.focus == Focus::Results && self.detail_scroll.active() == panel
	}

	fn detail_block<'a>(&self, title: impl Into<Line<'a>>, panel: DetailPanel) -> Block<'a> {
		panel_block(title, &self.theme, self.is_scroll_target(panel))
	}

	fn draw_reference(&mut self, frame: &mut Frame, area: Rect) {
		let block = self.detail_block(" Reference ", DetailPanel::Reference);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [tabs, body] =
			Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);
		let language = self.explorer.language();
		let labels: Vec<&str> = ReferenceLanguage::ALL
			.iter()
			.map(|language| language.label())
			.collect();
		render_language_tabs(frame, tabs, &labels, language.index(), &self.theme);

		match self.explorer.reference_solution() {
			Some(ReferenceSolution::Code(code)) => {
				let offset = self.detail_scroll.offset(DetailPanel::Reference);
				let applied = render_code(frame, body, &code, &self.theme, offset);
				self.detail_scroll.set(DetailPanel::Reference, applied);
			}
			Some(ReferenceSolution::Malformed(err)) => render_message(
				frame,
				body,
				&format!("could not parse reference solution: {err}"),
				self.theme.error_style(),
			),
			Some(ReferenceSolution::Missing) | None => render_message(
				frame,
				body,
				&format!("No {language} solution for this problem"),
				self.theme.empty_style(),
			),
		}
	}

	fn draw_generated(&mut self, frame: &mut Frame, area: Rect) {
		let title = format!(" Generated · {GENERATION_LANGUAGE} ");
		let block = self.detail_block(title, DetailPanel::Generated);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let offset = self.detail_scroll.offset(DetailPanel::Generated);
		let applied = match self.explorer.generated() {
			Load::Idle => 0,
			Load::Loading(_) => {
				render_code_spinner(
					frame,
					inner,
					" Generating",
					&self.throbber_state,
					&self.theme,
				);
				0
			}
			Load::Loaded(_, solution) => {
				render_code(frame, inner, &solution.code, &self.theme, offset)
			}
			Load::Failed(_, err) => {
				render_message(frame, inner, &failure_message(err), self.theme.error_style());
				0
			}
		};
		self.detail_scroll.set(DetailPanel::Generated, applied);
	}

	fn draw_description(&mut self, frame: &mut Frame, area: Rect, problem: &Problem) {
		let title = format!(" #{} {} ", problem.problem_id, problem.title);
		let block = self.detail_block(title, DetailPanel::Description);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let mut lines = vec![
			Line::from(vec![
				Span::styled(
					problem.difficulty.as_str(),
					self.theme.difficulty_style(problem.difficulty),
				),
				Span::raw("  "),
				Span::styled(problem.url(), self.theme.accent_style()),
			]),
			Line::default(),
		];
		lines.extend(problem.content.lines().map(Line::raw));
		let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
		let offset = self.detail_scroll.offset(DetailPanel::Description);
		let applied = render_scrolled(frame, inner, paragraph, offset);
		self.detail_scroll.set(DetailPanel::Description, applied);
	}

	fn draw_explanation(&mut self, frame: &mut Frame, area: Rect) {
		let block = self.detail_block(" Explanation ", DetailPanel::Explanation);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let offset = self.detail_scroll.offset(DetailPanel::Explanation);
		let applied = match self.explorer.generated() {
			Load::Idle => 0,
			Load::Loading(_) => {
				render_text_skeleton(frame, inner, &self.theme);
				0
			}
			Load::Loaded(_, solution) => {
				render_text(frame, inner, &solution.explanation, &self.theme, offset)
			}
			Load::Failed(..) => {
				render_message(
					frame,
					inner,
					"No explanation available",
					self.theme.empty_style(),
				);
				0
			}
		};
		self.detail_scroll.set(DetailPanel::Explanation, applied);
	}
}

fn failure_message(err: &RequestError) -> String {
	if err.is_retryable() {
		format!("{err} ({RETRY_HINT})")
	} else {
		err.to_string()
	}
}
