//! Colour theme values and the optional TOML file behind them.

use std::path::Path;

use anyhow::{Context, Result};
use crossterm::style::Color;
use serde::Deserialize;

use crate::border::Border;

/// Appearance defaults copied by panels and widgets at construction.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Used where nothing more specific applies; [`Color::Reset`] is the
    /// terminal's own foreground.
    pub default_colour: Color,
    pub select_colour: Color,
    pub select_prefix: String,
    pub border_colour: Color,
    pub border: Border,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            default_colour: Color::Reset,
            select_colour: Color::Green,
            select_prefix: "> ".to_string(),
            border_colour: Color::Reset,
            border: Border::SINGLE,
        }
    }
}

/// Theme file structure (`[theme]` table).
#[derive(Debug, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub theme: ThemeTable,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeTable {
    pub default_colour: Option<String>,
    pub select_colour: Option<String>,
    pub border_colour: Option<String>,
    pub select_prefix: Option<String>,
    pub border: Option<String>,
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_over(path, Self::default())
    }

    /// As [`Theme::load`], applying the file over `base` instead of the
    /// stock defaults. Lets callers ship their own defaults while still
    /// honouring the file.
    pub fn load_over<P: AsRef<Path>>(path: P, base: Theme) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("theme config not found at {}, using defaults", path.display());
            return Ok(base);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let config: ThemeConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        tracing::info!("loaded theme from {}", path.display());

        Ok(base.merged(&config))
    }

    /// Apply a parsed config over the stock defaults.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::default().merged(config)
    }

    /// Apply a parsed config over this theme. Unknown colour or border
    /// names are warned about and skipped.
    pub fn merged(mut self, config: &ThemeConfig) -> Self {
        let table = &config.theme;

        self.default_colour = colour_or(&table.default_colour, self.default_colour);
        self.select_colour = colour_or(&table.select_colour, self.select_colour);
        self.border_colour = colour_or(&table.border_colour, self.border_colour);

        if let Some(prefix) = &table.select_prefix {
            self.select_prefix = prefix.clone();
        }
        if let Some(name) = &table.border {
            match Border::named(name) {
                Some(border) => self.border = border,
                None => tracing::warn!("unknown border preset {:?}, keeping default", name),
            }
        }

        self
    }
}

fn colour_or(name: &Option<String>, fallback: Color) -> Color {
    match name {
        Some(name) => match parse_colour(name) {
            Some(colour) => colour,
            None => {
                tracing::warn!("unknown colour {:?}, keeping default", name);
                fallback
            }
        },
        None => fallback,
    }
}

/// Parse a colour from string
/// Supports: hex (#rrggbb), the 16 ANSI names, and "reset".
pub fn parse_colour(s: &str) -> Option<Color> {
    // Hex color
    if s.starts_with('#') && s.len() == 7 {
        let r = u8::from_str_radix(&s[1..3], 16).ok()?;
        let g = u8::from_str_radix(&s[3..5], 16).ok()?;
        let b = u8::from_str_radix(&s[5..7], 16).ok()?;
        return Some(Color::Rgb { r, g, b });
    }

    Some(match s.to_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "darkgrey" | "darkgray" => Color::DarkGrey,
        "darkred" => Color::DarkRed,
        "darkgreen" => Color::DarkGreen,
        "darkyellow" => Color::DarkYellow,
        "darkblue" => Color::DarkBlue,
        "darkmagenta" => Color::DarkMagenta,
        "darkcyan" => Color::DarkCyan,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colour() {
        // Hex colors
        let colour = parse_colour("#ff0000").unwrap();
        assert!(matches!(colour, Color::Rgb { r: 255, g: 0, b: 0 }));

        // Named colors, case-insensitive
        assert_eq!(parse_colour("Green"), Some(Color::Green));
        assert_eq!(parse_colour("darkcyan"), Some(Color::DarkCyan));

        // Unknown
        assert!(parse_colour("notacolour").is_none());
        assert!(parse_colour("#zzz").is_none());
    }

    #[test]
    fn test_from_config_overrides_defaults() {
        let config: ThemeConfig = toml::from_str(
            r#"
            [theme]
            select_colour = "cyan"
            select_prefix = ">> "
            border = "rounded"
            "#,
        )
        .unwrap();

        let theme = Theme::from_config(&config);
        assert_eq!(theme.select_colour, Color::Cyan);
        assert_eq!(theme.select_prefix, ">> ");
        assert_eq!(theme.border, Border::ROUNDED);
        // untouched fields keep their defaults
        assert_eq!(theme.default_colour, Color::Reset);
    }

    #[test]
    fn test_from_config_skips_unknown_names() {
        let config: ThemeConfig = toml::from_str(
            r#"
            [theme]
            select_colour = "chartreuse-ish"
            border = "dotted"
            "#,
        )
        .unwrap();

        let theme = Theme::from_config(&config);
        assert_eq!(theme.select_colour, Color::Green);
        assert_eq!(theme.border, Border::SINGLE);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let theme = Theme::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(theme.select_colour, Color::Green);
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placard.toml");
        std::fs::write(&path, "[theme]\nborder_colour = \"#336699\"\n").unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(
            theme.border_colour,
            Color::Rgb {
                r: 0x33,
                g: 0x66,
                b: 0x99
            }
        );
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placard.toml");
        std::fs::write(&path, "[theme\nbroken").unwrap();
        assert!(Theme::load(&path).is_err());
    }

    #[test]
    fn test_load_over_keeps_base_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let base = Theme {
            border: Border::DOUBLE,
            ..Theme::default()
        };

        let theme = Theme::load_over(dir.path().join("absent.toml"), base).unwrap();
        assert_eq!(theme.border, Border::DOUBLE);
        assert_eq!(theme.select_colour, Color::Green);
    }

    #[test]
    fn test_load_over_lets_the_file_win() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placard.toml");
        std::fs::write(&path, "[theme]\nborder = \"rounded\"\n").unwrap();

        let base = Theme {
            border: Border::DOUBLE,
            ..Theme::default()
        };
        let theme = Theme::load_over(&path, base).unwrap();
        assert_eq!(theme.border, Border::ROUNDED);
    }
}
