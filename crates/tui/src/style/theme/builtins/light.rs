use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::{Theme, ThemeDefinition};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(30, 41, 59))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(203, 213, 225))
		.fg(Color::Rgb(15, 23, 42)),
	prompt: Style::new()
		.fg(Color::Rgb(190, 24, 93))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Gray),
	accent: Style::new().fg(Color::Rgb(190, 24, 93)),
	selected: Style::new().bg(Color::Rgb(226, 232, 240)),
	skeleton: Style::new().fg(Color::Rgb(203, 213, 225)),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
	easy: Style::new().fg(Color::Rgb(21, 128, 61)),
	medium: Style::new().fg(Color::Rgb(161, 98, 7)),
	hard: Style::new().fg(Color::Rgb(185, 28, 28)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new("light", LIGHT);
