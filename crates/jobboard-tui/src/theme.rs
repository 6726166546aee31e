//! Colour theme for the jobboard TUI.
//!
//! Themes are defined as TOML files embedded in the binary via
//! [`include_str!`], so the application works without any files on disk.
//!
//! # Company colours
//!
//! Company names are hashed to a stable index into the palette so the same
//! company always gets the same colour, regardless of list order.

use config::{Config, File, FileFormat};
use jobboard_core::JobType;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawTypes {
    full_time: RawStyle,
    part_time: RawStyle,
    contract: RawStyle,
    freelance: RawStyle,
    other: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawText {
    title: RawStyle,
    muted: RawStyle,
    salary: RawStyle,
    selected: RawStyle,
    error: RawStyle,
    info: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCompanies {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    types: RawTypes,
    borders: RawBorders,
    text: RawText,
    companies: RawCompanies,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved.
#[derive(Debug, Clone)]
pub struct Theme {
    pub type_full_time: Style,
    pub type_part_time: Style,
    pub type_contract: Style,
    pub type_freelance: Style,
    /// Values outside the four known job types.
    pub type_other: Style,

    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    pub title: Style,
    pub muted: Style,
    pub salary: Style,
    /// Highlight for the selected list row.
    pub selected: Style,
    pub error: Style,
    pub info: Style,

    company_palette: Vec<Color>,
}

impl Theme {
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Look up an embedded theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::load_default()),
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Some(Self::load_gruvbox_dark()),
            _ => None,
        }
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            type_full_time: raw.types.full_time.into_style(),
            type_part_time: raw.types.part_time.into_style(),
            type_contract: raw.types.contract.into_style(),
            type_freelance: raw.types.freelance.into_style(),
            type_other: raw.types.other.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            title: raw.text.title.into_style(),
            muted: raw.text.muted.into_style(),
            salary: raw.text.salary.into_style(),
            selected: raw.text.selected.into_style(),
            error: raw.text.error.into_style(),
            info: raw.text.info.into_style(),
            company_palette: raw.companies.palette.iter().filter_map(|s| parse_color(s)).collect(),
        })
    }

    pub fn type_style(&self, job_type: &JobType) -> Style {
        match job_type {
            JobType::FullTime => self.type_full_time,
            JobType::PartTime => self.type_part_time,
            JobType::Contract => self.type_contract,
            JobType::Freelance => self.type_freelance,
            JobType::Other(_) => self.type_other,
        }
    }

    /// Stable colour for a company name.
    pub fn company_style(&self, company: &str) -> Style {
        if self.company_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(company) % self.company_palette.len();
        Style::default().fg(self.company_palette[idx])
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load_default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// djb2-style hash, stable across Rust versions and process restarts.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts named terminal colours (case-insensitive), `#rrggbb` and
/// `indexed:N`.
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
