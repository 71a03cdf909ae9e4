//! Day/night theme selection
//!
//! A theme sets two display variables, `--color-dark` and `--color-light`,
//! each an RGB triple. It has no interaction with the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CatalogError;

/// An RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

/// The two named display variables a theme sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeVariables {
    /// `--color-dark`
    pub color_dark: Rgb,
    /// `--color-light`
    pub color_light: Rgb,
}

impl ThemeVariables {
    /// `(name, value)` pairs in declaration order
    pub fn as_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("--color-dark", self.color_dark.to_string()),
            ("--color-light", self.color_light.to_string()),
        ]
    }
}

/// Theme mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    pub fn variables(self) -> ThemeVariables {
        match self {
            ThemeMode::Night => ThemeVariables {
                color_dark: PAPER,
                color_light: INK,
            },
            ThemeMode::Day => ThemeVariables {
                color_dark: INK,
                color_light: PAPER,
            },
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Day => "day",
            ThemeMode::Night => "night",
        }
    }

    /// Guess the preferred mode from the terminal environment
    ///
    /// Uses the `COLORFGBG` convention (`"fg;bg"`): a dark background colour
    /// index selects night mode. Falls back to day.
    pub fn from_environment() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match background {
            Some(0..=6) | Some(8) => ThemeMode::Night,
            _ => ThemeMode::Day,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ThemeMode::Day),
            "night" => Ok(ThemeMode::Night),
            _ => Err(CatalogError::UnknownTheme(s.to_string())),
        }
    }
}
