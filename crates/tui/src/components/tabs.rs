use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::style::Theme;

/// Render a row of selectable labels with `selected` highlighted.
pub fn render_language_tabs(
	frame: &mut Frame,
	area: Rect,
	labels: &[&str],
	selected: usize,
	theme: &Theme,
) {
	let active = theme.tab_highlight_style();
	let inactive = theme.tab_inactive_style();
	let titles: Vec<Line<'static>> = labels
		.iter()
		.enumerate()
		.map(|(index, label)| {
			let style = if index == selected { active } else { inactive };
			Line::from(format!(" {label} ")).style(style)
		})
		.collect();

	let tabs = Tabs::new(titles)
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(active);
	frame.render_widget(tabs, area);
}
