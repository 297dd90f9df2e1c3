use leetex_core::Problem;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADER_HEIGHT: u16 = 1;

/// Argument bundle describing one page of results.
pub struct ResultsView<'a> {
	pub problems: &'a [Problem],
	/// Id of the problem currently shown in the detail panels.
	pub selected_id: Option<u64>,
	/// Whether the table cursor should be drawn.
	pub focused: bool,
}

/// Pagination footer state.
#[derive(Debug, Clone, Copy)]
pub struct PaginationView {
	/// One-based inclusive range of the visible page.
	pub range: Option<(usize, usize)>,
	pub can_retreat: bool,
}

/// Render the result table. The caller draws the surrounding block.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	view: ResultsView<'_>,
	theme: &Theme,
) {
	let header = Row::new(vec![Cell::from("Title"), Cell::from("Level"), Cell::from("#")])
		.style(Style::default().fg(theme.header_fg()))
		.height(HEADER_HEIGHT)
		.bottom_margin(1);

	let rows = view.problems.iter().map(|problem| {
		let mut row = Row::new(vec![
			Cell::from(problem.title.as_str()),
			Cell::from(Span::styled(
				problem.difficulty.as_str(),
				theme.difficulty_style(problem.difficulty),
			)),
			Cell::from(Span::styled(
				problem.problem_id.to_string(),
				theme.empty_style(),
			)),
		]);
		if view.selected_id == Some(problem.problem_id) {
			row = row.style(theme.selected);
		}
		row
	});

	let widths = [
		Constraint::Fill(1),
		Constraint::Length(6),
		Constraint::Length(5),
	];
	let highlight_spacing = if view.focused {
		HighlightSpacing::Always
	} else {
		HighlightSpacing::Never
	};
	let highlight_style = if view.focused {
		theme.row_highlight_style()
	} else {
		Style::default()
	};
	let table = Table::new(rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(highlight_spacing)
		.row_highlight_style(highlight_style)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if HEADER_HEIGHT >= area.height || area.width <= 2 {
		return;
	}
	let sep_rect = Rect {
		x: area.x,
		y: area.y + HEADER_HEIGHT,
		width: area.width,
		height: 1,
	};
	let middle = "─".repeat(usize::from(area.width) - 2);
	let spans = vec![
		Span::raw(" "),
		Span::styled(middle, Style::default().fg(theme.header_fg())),
		Span::raw(" "),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

/// Footer line: "Showing a - b" on the left, page controls on the right.
#[must_use]
pub fn pagination_line(view: PaginationView, width: u16, theme: &Theme) -> Line<'static> {
	let label = match view.range {
		Some((start, end)) => format!("Showing {start} - {end}"),
		None => "No results on this page".to_string(),
	};
	let retreat_style = if view.can_retreat {
		Style::default().fg(theme.header_fg())
	} else {
		theme.empty_style()
	};
	let controls = [
		Span::styled("«g ", retreat_style),
		Span::styled("‹p ", retreat_style),
		Span::styled("n›", Style::default().fg(theme.header_fg())),
	];
	let controls_width: usize = controls.iter().map(Span::width).sum();
	let label_width = Span::raw(label.as_str()).width();
	let padding = usize::from(width).saturating_sub(label_width + controls_width);

	let mut spans = vec![
		Span::styled(label, theme.empty_style()),
		Span::raw(" ".repeat(padding)),
	];
	spans.extend(controls);
	Line::from(spans)
}

pub fn render_pagination(frame: &mut Frame, area: Rect, view: PaginationView, theme: &Theme) {
	frame.render_widget(Paragraph::new(pagination_line(view, area.width, theme)), area);
}
