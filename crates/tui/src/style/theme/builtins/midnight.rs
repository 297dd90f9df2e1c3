use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::{Theme, ThemeDefinition};

const PINK: Color = Color::Rgb(234, 35, 119);

pub const MIDNIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(31, 41, 55))
		.fg(Color::Rgb(250, 250, 250)),
	prompt: Style::new().fg(PINK).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray),
	accent: Style::new().fg(PINK),
	selected: Style::new().bg(Color::Rgb(31, 41, 55)),
	skeleton: Style::new().fg(Color::Rgb(75, 85, 99)),
	error: Style::new().fg(Color::Rgb(239, 68, 68)),
	easy: Style::new().fg(Color::Rgb(34, 197, 94)),
	medium: Style::new().fg(Color::Rgb(253, 224, 71)),
	hard: Style::new().fg(Color::Rgb(239, 68, 68)),
};

pub const DEFINITION: ThemeDefinition =
	ThemeDefinition::new("default", MIDNIGHT).with_aliases(&["midnight", "dark"]);
