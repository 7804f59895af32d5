use xdg::BaseDirectories;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;

use crate::calendar::{Day, DEFAULT_EDGE_THRESHOLD, DEFAULT_SUMMARY_FORMAT};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// chrono format for the selected dates shown above the grid
    pub date_format: String,
    pub calendar: CalendarConfig,
    pub theme: ThemeConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Scroll units from either edge that trigger loading another month
    pub edge_threshold: u32,
    /// Delay before the loading screen starts fading out
    pub loading_delay_ms: u64,
    /// Duration of the loading screen fade-out
    pub fade_out_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub today_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub endpoint_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub endpoint_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub between_bg: Color,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Accounts accepted by the built-in identity provider; empty disables the login screen
    pub accounts: Vec<Account>,
}

#[derive(Deserialize, Clone, PartialEq)]
pub struct Account {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            date_format: DEFAULT_SUMMARY_FORMAT.to_string(),
            calendar: CalendarConfig::default(),
            theme: ThemeConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            loading_delay_ms: 500,
            fade_out_ms: 250,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            today_fg: Color::Rgb(255, 165, 0), // Orange
            endpoint_fg: Color::Black,
            endpoint_bg: Color::Cyan,
            between_bg: Color::DarkGray,
        }
    }
}

impl AuthConfig {
    pub fn login_required(&self) -> bool {
        !self.accounts.is_empty()
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

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        return match hex.len() {
            6 if hex.is_ascii() => Some(Color::Rgb(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 if hex.is_ascii() => Some(Color::Rgb(
                u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?,
                u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?,
                u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?,
            )),
            _ => None,
        };
    }

    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() == 3 {
        let r = parts[0].trim().parse::<u8>().ok()?;
        let g = parts[1].trim().parse::<u8>().ok()?;
        let b = parts[2].trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
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

    parse(&content)
}

/// Parse config file contents, falling back to defaults on invalid TOML
///
/// A `date_format` chrono cannot apply to a date is replaced by the default.
pub fn parse(content: &str) -> Config {
    let mut config: Config = toml::from_str(content).unwrap_or_else(|e| {
        tracing::warn!("Invalid config file, using defaults: {}", e);
        Config::default()
    });

    if Day::default().try_format(&config.date_format).is_none() {
        tracing::warn!(
            "Invalid date_format '{}', using '{}'",
            config.date_format,
            DEFAULT_SUMMARY_FORMAT
        );
        config.date_format = DEFAULT_SUMMARY_FORMAT.to_string();
    }
    config
}
