use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
	pub(super) default_name: String,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleEntry,
	border: StyleEntry,
	row_highlight: StyleEntry,
	editing: StyleEntry,
	field: StyleEntry,
	field_focused: StyleEntry,
	hint: StyleEntry,
}

impl ThemeStyles {
	fn into_theme(self) -> Result<Theme> {
		Ok(Theme {
			header: self.header.to_style().context("styles.header")?,
			border: self.border.to_style().context("styles.border")?,
			row_highlight: self.row_highlight.to_style().context("styles.row_highlight")?,
			editing: self.editing.to_style().context("styles.editing")?,
			field: self.field.to_style().context("styles.field")?,
			field_focused: self.field_focused.to_style().context("styles.field_focused")?,
			hint: self.hint.to_style().context("styles.hint")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleEntry {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl StyleEntry {
	fn to_style(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("foreground `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("background `{bg}`"))?);
		}
		for modifier in &self.modifiers {
			style = style.add_modifier(parse_modifier(modifier)?);
		}
		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default_theme = None;

	for file in files {
		let path = file.path();
		let contents = file
			.contents_utf8()
			.with_context(|| format!("{path:?} is not valid UTF-8"))?;
		let parsed: ThemeFile = toml::from_str(contents)
			.with_context(|| format!("failed to parse built-in theme {path:?}"))?;

		let theme = parsed
			.styles
			.into_theme()
			.with_context(|| format!("invalid styles in {path:?}"))?;
		if parsed.default {
			if default_theme.is_some() {
				bail!("more than one built-in theme is marked as default");
			}
			default_theme = Some((parsed.name.clone(), theme));
		}

		let registration = parsed
			.aliases
			.into_iter()
			.fold(ThemeRegistration::new(parsed.name, theme), |registration, alias| {
				registration.alias(alias)
			});
		registrations.push(registration);
	}

	let Some((default_name, default_theme)) = default_theme.or_else(|| {
		registrations
			.first()
			.map(|registration| (registration.name.clone(), registration.theme))
	}) else {
		bail!("no built-in theme definitions were found");
	};

	Ok(BuiltinThemes {
		registrations,
		default_theme,
		default_name,
	})
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		if hex.len() != 6 {
			bail!("hex colours must be 6 characters long");
		}
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid hex colour `{value}`"))
		};
		return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
	}

	if let Some(index) = value.strip_prefix("ansi(").and_then(|s| s.strip_suffix(')')) {
		let index: u8 = index
			.trim()
			.parse()
			.with_context(|| format!("invalid ANSI colour index `{index}`"))?;
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_str() {
		"reset" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" => Ok(Modifier::REVERSED),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.replace(['-', ' '], "_")
}
