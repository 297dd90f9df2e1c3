use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::panel::render_scrolled;
use crate::style::Theme;

/// Split `code` into lines prefixed with a right-aligned line number.
#[must_use]
pub fn numbered_lines<'a>(code: &'a str, theme: &Theme) -> Vec<Line<'a>> {
	let total = code.lines().count().max(1);
	let gutter = total.to_string().len();
	let number_style = theme.empty_style();
	let text_style = Style::default().fg(theme.header_fg());
	code.lines()
		.enumerate()
		.map(|(index, line)| {
			Line::from(vec![
				Span::styled(format!("{:>gutter$} ", index + 1), number_style),
				Span::styled(line, text_style),
			])
		})
		.collect()
}

/// Render `code` with a line-number gutter, scrolled down by `scroll` lines.
/// Returns the scroll offset actually applied.
pub fn render_code(frame: &mut Frame, area: Rect, code: &str, theme: &Theme, scroll: u16) -> u16 {
	render_scrolled(frame, area, Paragraph::new(numbered_lines(code, theme)), scroll)
}
