use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

use crate::competition::Competition;
use crate::normalize::StatusStyle;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Live view poll period, in seconds
    pub refresh_interval: u32,
    /// Status bar clock format
    pub time_format: String,
    /// Competition shown when no selection was made yet
    pub default_competition: Competition,
    pub theme: ThemeConfig,
}

/// Colors for the four match-status styles.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub live_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub halftime_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub finished_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub scheduled_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 60,
            time_format: "%H:%M:%S".to_string(),
            default_competition: Competition::Eredivisie,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            live_fg: Color::Red,
            halftime_fg: Color::Rgb(255, 165, 0), // Orange
            finished_fg: Color::Green,
            scheduled_fg: Color::Gray,
        }
    }
}

impl ThemeConfig {
    /// Color for a status style bucket
    pub fn status_fg(&self, style: StatusStyle) -> Color {
        match style {
            StatusStyle::Live => self.live_fg,
            StatusStyle::Halftime => self.halftime_fg,
            StatusStyle::Finished => self.finished_fg,
            StatusStyle::Scheduled => self.scheduled_fg,
        }
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn parse_named_color(s: &str) -> Option<Color> {
    match s {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "orange" => Some(Color::Rgb(255, 165, 0)),
        _ => None,
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if hex.len() == 3 {
        let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
        let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
        let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

fn parse_rgb_tuple(s: &str) -> Option<Color> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    let r = parts[0].trim().parse::<u8>().ok()?;
    let g = parts[1].trim().parse::<u8>().ok()?;
    let b = parts[2].trim().parse::<u8>().ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(color) = parse_named_color(&s) {
        return Some(color);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    if s.contains(',') {
        return parse_rgb_tuple(&s);
    }
    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("ORANGE"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("grey"), Some(Color::Gray));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 165, 0"), Some(Color::Rgb(255, 165, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.refresh_interval, 60);
        assert_eq!(config.default_competition, Competition::Eredivisie);
        assert_eq!(config.theme.live_fg, Color::Red);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
refresh_interval = 120
default_competition = "CL"

[theme]
live_fg = "#00FFFF"
finished_fg = "blue"
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.refresh_interval, 120);
        assert_eq!(config.default_competition, Competition::ChampionsLeague);
        assert_eq!(config.theme.live_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.theme.finished_fg, Color::Blue);
        // Unset fields keep their defaults
        assert_eq!(config.theme.halftime_fg, Color::Rgb(255, 165, 0));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_status_fg_mapping() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.status_fg(StatusStyle::Live), Color::Red);
        assert_eq!(theme.status_fg(StatusStyle::Scheduled), Color::Gray);
    }
}
