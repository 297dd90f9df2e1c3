use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::style::Theme;

/// Rounded, titled block used for every explorer panel.
pub fn panel_block<'a>(title: impl Into<Line<'a>>, theme: &Theme, focused: bool) -> Block<'a> {
	Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style(focused))
		.title(title)
}

/// Render a short centered message, used for empty and error states.
pub fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let mut target = area;
	if target.height > 1 {
		target.y += target.height / 2 - 1;
		target.height -= target.height / 2 - 1;
	}
	let paragraph = Paragraph::new(message)
		.alignment(Alignment::Center)
		.style(style)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, target);
}

/// Render wrapped plain text, starting `scroll` lines down. Returns the
/// scroll offset actually applied.
pub fn render_text(frame: &mut Frame, area: Rect, text: &str, theme: &Theme, scroll: u16) -> u16 {
	let paragraph = Paragraph::new(Text::raw(text.to_string()))
		.style(Style::default().fg(theme.header_fg()))
		.wrap(Wrap { trim: false });
	render_scrolled(frame, area, paragraph, scroll)
}

/// Render `paragraph` scrolled down by `scroll` lines, clamped so the last
/// line never leaves the bottom of `area`. Returns the applied offset.
pub fn render_scrolled(
	frame: &mut Frame,
	area: Rect,
	paragraph: Paragraph<'_>,
	scroll: u16,
) -> u16 {
	let scroll = scroll.min(max_scroll(&paragraph, area));
	frame.render_widget(paragraph.scroll((scroll, 0)), area);
	scroll
}

fn max_scroll(paragraph: &Paragraph<'_>, area: Rect) -> u16 {
	if area.width == 0 {
		return 0;
	}
	let total = paragraph.line_count(area.width);
	u16::try_from(total.saturating_sub(usize::from(area.height))).unwrap_or(u16::MAX)
}
