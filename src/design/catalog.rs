//! Fixed design catalogs.
//!
//! Order matters: the selector indexes these tables by position, so any
//! change here changes the design produced for an existing seed. Bump
//! [`CATALOG_VERSION`] when editing them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version tag of the catalog tables below.
pub const CATALOG_VERSION: u32 = 2;

/// Visual arrangement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Main text inside a bordered card
    Frame,
    /// Main text with no extra framing
    Center,
    /// Title-left / badge-right header
    Split,
    /// Detail block stacked under the main text
    Stack,
    /// Multiple items in columns
    List,
    /// Light paper sheet
    Paper,
}

/// All templates in catalog order.
pub const TEMPLATES: [Template; 6] = [
    Template::Frame,
    Template::Center,
    Template::Split,
    Template::Stack,
    Template::List,
    Template::Paper,
];

impl Template {
    /// Lowercase catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Template::Frame => "frame",
            Template::Center => "center",
            Template::Split => "split",
            Template::Stack => "stack",
            Template::List => "list",
            Template::Paper => "paper",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TEMPLATES
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown template '{}'", s))
    }
}

/// Light or dark rendering mode of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Dark,
    Light,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Mode::Dark),
            "light" => Ok(Mode::Light),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        })
    }
}

/// Font family of the main text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    Serif,
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            FontFamily::Sans => "sans",
            FontFamily::Serif => "serif",
        })
    }
}

/// All font families in catalog order.
pub const FONTS: [FontFamily; 2] = [FontFamily::Sans, FontFamily::Serif];

/// Background gradient, accent and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Palette {
    /// First gradient stop
    pub from: &'static str,
    /// Second gradient stop
    pub to: &'static str,
    /// Accent color for badges and glows
    pub accent: &'static str,
    /// Light or dark
    pub mode: Mode,
    /// Sheet fill, only set on light palettes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper: Option<&'static str>,
}

impl Palette {
    const fn dark(from: &'static str, to: &'static str, accent: &'static str) -> Self {
        Self {
            from,
            to,
            accent,
            mode: Mode::Dark,
            paper: None,
        }
    }

    const fn light(
        from: &'static str,
        to: &'static str,
        accent: &'static str,
        paper: &'static str,
    ) -> Self {
        Self {
            from,
            to,
            accent,
            mode: Mode::Light,
            paper: Some(paper),
        }
    }

    /// Whether this is a light/paper palette.
    pub fn is_light(&self) -> bool {
        self.mode == Mode::Light
    }
}

/// All palettes in catalog order: five dark, then three light.
pub const PALETTES: [Palette; 8] = [
    Palette::dark("#0b1220", "#0e2a3a", "#7aa6ff"),
    Palette::dark("#0b0f19", "#2a174b", "#b892ff"),
    Palette::dark("#070a12", "#1b2a3a", "#80ffd1"),
    Palette::dark("#071016", "#123024", "#a6ff7a"),
    Palette::dark("#0b0b10", "#2a1b12", "#ffcc80"),
    Palette::light("#fbf7ef", "#f2eadb", "#b08a2e", "#fffdf8"),
    Palette::light("#f7fbff", "#eef4ff", "#2f5bd6", "#ffffff"),
    Palette::light("#f8faf9", "#eef4f1", "#1f7a57", "#ffffff"),
];

/// Palette substituted when a paper template lands on a dark palette.
pub const CANONICAL_PAPER: Palette = PALETTES[5];

/// Palettes of the given mode, in catalog order.
pub fn palettes_of(mode: Mode) -> Vec<Palette> {
    PALETTES.iter().copied().filter(|p| p.mode == mode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(TEMPLATES.len(), 6);
        assert_eq!(palettes_of(Mode::Dark).len(), 5);
        assert_eq!(palettes_of(Mode::Light).len(), 3);
        assert!(PALETTES.iter().all(|p| p.is_light() == p.paper.is_some()));
    }

    #[test]
    fn test_canonical_paper_is_light() {
        assert!(CANONICAL_PAPER.is_light());
        assert_eq!(CANONICAL_PAPER.paper, Some("#fffdf8"));
    }

    #[test]
    fn test_template_parse() {
        assert_eq!("Paper".parse::<Template>().unwrap(), Template::Paper);
        assert_eq!(" list ".parse::<Template>().unwrap(), Template::List);
        assert!("poster".parse::<Template>().is_err());
        assert_eq!(Template::Split.to_string(), "split");
    }
}
