use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering the query row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub title: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status shown at the right edge of the query row.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render `title > query` with the search status right-aligned on the same row.
pub fn render_prompt(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		title,
		area,
		theme,
	} = input;

	let prompt = format!("{title} > ");
	let prompt_width = u16::try_from(prompt.width()).unwrap_or(u16::MAX);
	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(prompt_width), Constraint::Min(1)]).areas(area);

	frame.render_widget(Span::styled(prompt, theme.prompt_style()), prompt_area);
	search_input.render_textarea(frame, input_area);
	render_progress(frame, input_area, progress, theme);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		progress_text,
		loading,
		throbber_state,
	} = progress;
	if area.width == 0 || area.height == 0 || progress_text.is_empty() {
		return;
	}

	let muted = theme.empty_style();
	let mut line = Line::default();
	if loading {
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(progress_text.to_string(), muted));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Keep two columns between the typed query and the status.
	let row = area.top();
	let last_char_x = (area.left()..area.right())
		.filter(|&x| {
			buffer
				.cell((x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}
