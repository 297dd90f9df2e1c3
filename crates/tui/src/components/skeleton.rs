use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::style::Theme;

/// Rows drawn by the results skeleton, independent of the page size.
pub const RESULT_SKELETON_ROWS: usize = 5;

const BAR: char = '▒';

/// Relative widths of the explanation placeholder bars.
const TEXT_BAR_RATIOS: [f32; 5] = [0.78, 0.97, 1.0, 0.73, 0.78];

fn bar(width: usize, theme: &Theme) -> Span<'static> {
	Span::styled(BAR.to_string().repeat(width), theme.skeleton)
}

/// Placeholder lines for the results table: one line per row followed by a
/// blank separator, then the pagination footer. No line is wider than
/// `width`.
#[must_use]
pub fn results_skeleton_lines(width: u16, theme: &Theme) -> Vec<Line<'static>> {
	let width = usize::from(width);
	let title = (width * 3 / 5).max(1);
	let difficulty = 6.min(width.saturating_sub(title + 1));
	let gap = width.saturating_sub(title + difficulty + 2);

	let mut lines = Vec::with_capacity(RESULT_SKELETON_ROWS * 2 + 1);
	for _ in 0..RESULT_SKELETON_ROWS {
		let row = vec![
			bar(title, theme),
			Span::raw(" ".repeat(gap)),
			bar(difficulty, theme),
			Span::raw(" "),
			bar(1, theme),
		];
		lines.push(clipped(row, width));
		lines.push(Line::default());
	}
	let footer = vec![
		bar((width / 4).max(1), theme),
		Span::raw(" ".repeat(width.saturating_sub(width / 4 + 5))),
		bar(2, theme),
		Span::raw(" "),
		bar(2, theme),
	];
	lines.push(clipped(footer, width));
	lines
}

/// Cut `spans` down to `width` columns. Every span holds single-column
/// characters only.
fn clipped(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
	let mut remaining = width;
	let mut kept = Vec::with_capacity(spans.len());
	for mut span in spans {
		if remaining == 0 {
			break;
		}
		let len = span.content.chars().count();
		if len > remaining {
			span.content = span.content.chars().take(remaining).collect::<String>().into();
		}
		remaining -= len.min(remaining);
		kept.push(span);
	}
	Line::from(kept)
}

/// Placeholder bars for a block of prose.
#[must_use]
pub fn text_skeleton_lines(width: u16, theme: &Theme) -> Vec<Line<'static>> {
	TEXT_BAR_RATIOS
		.iter()
		.flat_map(|ratio| {
			let len = ((f32::from(width) * ratio) as usize).clamp(1, usize::from(width.max(1)));
			[Line::from(bar(len, theme)), Line::default()]
		})
		.collect()
}

pub fn render_results_skeleton(frame: &mut Frame, area: Rect, theme: &Theme) {
	let paragraph = Paragraph::new(results_skeleton_lines(area.width, theme));
	frame.render_widget(paragraph, area);
}

pub fn render_text_skeleton(frame: &mut Frame, area: Rect, theme: &Theme) {
	let paragraph = Paragraph::new(text_skeleton_lines(area.width, theme));
	frame.render_widget(paragraph, area);
}

/// Centered spinner shown while a solution is being generated.
pub fn render_code_spinner(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	let [_, middle, _] = Layout::vertical([
		Constraint::Fill(1),
		Constraint::Length(1),
		Constraint::Fill(1),
	])
	.areas(area);

	let spinner = Throbber::default()
		.style(theme.accent_style())
		.throbber_style(theme.accent_style());
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled(label.to_string(), theme.empty_style()),
	]);
	frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;

	#[test]
	fn results_skeleton_has_fixed_row_count() {
		let theme = Theme::default();
		for width in [20, 40, 80] {
			let lines = results_skeleton_lines(width, &theme);
			assert_eq!(lines.len(), RESULT_SKELETON_ROWS * 2 + 1);
			assert!(lines.iter().all(|line| line.width() <= usize::from(width)));
		}
	}

	#[test]
	fn results_skeleton_fits_very_narrow_areas() {
		let theme = Theme::default();
		for width in [0, 1, 3, 4] {
			let lines = results_skeleton_lines(width, &theme);
			assert_eq!(lines.len(), RESULT_SKELETON_ROWS * 2 + 1);
			assert!(
				lines.iter().all(|line| line.width() <= usize::from(width)),
				"width {width} overflowed: {lines:?}"
			);
		}
		let lines = results_skeleton_lines(3, &theme);
		assert_eq!(lines[0].width(), 3);
		assert_eq!(lines[RESULT_SKELETON_ROWS * 2].width(), 3);
	}

	#[test]
	fn text_skeleton_bars_fit_the_area() {
		let theme = Theme::default();
		let lines = text_skeleton_lines(50, &theme);
		assert_eq!(lines.len(), TEXT_BAR_RATIOS.len() * 2);
		assert_eq!(lines[4].width(), 50);
		assert!(lines.iter().all(|line| line.width() <= 50));
	}

	#[test]
	fn spinner_renders_label_in_the_middle_row() {
		let mut terminal = Terminal::new(TestBackend::new(30, 5)).expect("terminal");
		let state = ThrobberState::default();
		terminal
			.draw(|frame| {
				render_code_spinner(frame, frame.area(), " Generating", &state, &Theme::default());
			})
			.expect("draw");
		let buffer = terminal.backend().buffer();
		let middle: String = (0..30)
			.map(|x| buffer[(x, 2)].symbol().to_string())
			.collect();
		assert!(middle.contains("Generating"), "row was {middle:?}");
	}
}
