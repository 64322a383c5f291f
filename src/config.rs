use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::monitor::{Dimension, DisplayDevice, Point, StaticHost};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "DISPLAY_PICKER_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub picker: WindowSize,
    #[serde(default = "WindowSize::identify_default")]
    pub identify: WindowSize,
    /// Remote end to move once a display is chosen. Without it the selection
    /// is only reported.
    pub webdriver: Option<WebDriverConfig>,
    /// Fixed layout that replaces live display enumeration.
    #[serde(default)]
    pub displays: Vec<DisplayEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picker: WindowSize::default(),
            identify: WindowSize::identify_default(),
            webdriver: None,
            displays: Vec::new(),
        }
    }
}

/// Size of one of the picker's own windows.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 420,
            height: 170,
        }
    }
}

impl WindowSize {
    fn identify_default() -> Self {
        Self {
            width: 360,
            height: 120,
        }
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct WebDriverConfig {
    /// Base URL of the remote end, e.g. `http://localhost:4444`.
    pub url: String,
    #[serde(default = "default_browser")]
    pub browser: String,
    /// Page to open once the window has been moved.
    pub start_url: Option<String>,
    /// Attach to this session instead of starting a new one.
    pub session_id: Option<String>,
}

fn default_browser() -> String {
    "firefox".to_string()
}

/// One `[[displays]]` entry.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub id: String,
    pub name: Option<String>,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub default: bool,
}

impl DisplayEntry {
    /// Whether the display's far edges, and any window of up to `window`
    /// size centred on it, stay within `i32` coordinates.
    fn fits_screen_space(&self, window: Dimension) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        let left = self.x.checked_sub(window.width);
        let top = self.y.checked_sub(window.height);
        right.is_some() && bottom.is_some() && left.is_some() && top.is_some()
    }

    fn to_device(&self) -> DisplayDevice {
        let mut device = DisplayDevice::new(
            self.id.clone(),
            Point::new(self.x, self.y),
            Dimension::new(self.width, self.height),
        );
        if let Some(name) = &self.name {
            device.name = name.clone();
        }
        device
    }
}

/// A problem found while validating a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub message: String,
    pub is_error: bool,
}

impl ConfigIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (section, size) in [("picker", self.picker), ("identify", self.identify)] {
            if size.width <= 0 || size.height <= 0 {
                issues.push(ConfigIssue::error(format!(
                    "[{}] size must be positive, got {}x{}",
                    section, size.width, size.height
                )));
            }
        }

        if let Some(webdriver) = &self.webdriver {
            if !(webdriver.url.starts_with("http://") || webdriver.url.starts_with("https://")) {
                issues.push(ConfigIssue::error(format!(
                    "[webdriver] url must be http(s), got {:?}",
                    webdriver.url
                )));
            }
            if webdriver.browser.trim().is_empty() {
                issues.push(ConfigIssue::error("[webdriver] browser must not be empty"));
            }
        }

        for (i, entry) in self.displays.iter().enumerate() {
            if entry.width <= 0 || entry.height <= 0 {
                issues.push(ConfigIssue::error(format!(
                    "displays[{}] ({}) has non-positive size {}x{}",
                    i, entry.id, entry.width, entry.height
                )));
            }
            if !entry.fits_screen_space(self.largest_window()) {
                issues.push(ConfigIssue::error(format!(
                    "displays[{}] ({}) extends outside screen coordinates: {}x{} at ({}, {})",
                    i, entry.id, entry.width, entry.height, entry.x, entry.y
                )));
            }
            if !entry.id.chars().any(|c| c.is_ascii_digit()) {
                issues.push(ConfigIssue::warning(format!(
                    "displays[{}] id {:?} has no display number",
                    i, entry.id
                )));
            }
        }

        let defaults = self.displays.iter().filter(|d| d.default).count();
        if defaults > 1 {
            issues.push(ConfigIssue::warning(format!(
                "{} displays are marked default; using the first",
                defaults
            )));
        }

        issues
    }

    /// Bounding size of every window the picker places on a display.
    fn largest_window(&self) -> Dimension {
        Dimension::new(
            self.picker.width.max(self.identify.width).max(0),
            self.picker.height.max(self.identify.height).max(0),
        )
    }

    /// Host for the configured static layout, if any.
    pub fn static_host(&self) -> Option<StaticHost> {
        if self.displays.is_empty() {
            return None;
        }
        let devices = self.displays.iter().map(DisplayEntry::to_device).collect();
        let default = self
            .displays
            .iter()
            .position(|d| d.default)
            .or(Some(0));
        Some(StaticHost::new(devices, default))
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("display-picker")
        .join("config.toml")
}

pub fn load_config() -> Config {
    load_config_from(&get_config_path())
}

/// Load and validate a config file, falling back to defaults on any error.
pub fn load_config_from(config_path: &Path) -> Config {
    let config = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match Config::from_toml_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {:?}", config_path);
                    config
                }
                Err(e) => {
                    log::error!("Failed to parse config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                log::error!("Failed to read config file: {}", e);
                Config::default()
            }
        }
    } else {
        log::info!("No config file found at {:?}, using defaults", config_path);
        Config::default()
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error {
            log::error!("Config: {}", issue);
        } else {
            log::warn!("Config: {}", issue);
        }
    }

    if issues.iter().any(|i| i.is_error) {
        log::error!("Config has errors; falling back to defaults.");
        return Config::default();
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::DisplayHost;

    #[test]
    fn default_matches_empty_file() {
        let parsed = Config::from_toml_str("").unwrap();
        let default = Config::default();
        assert_eq!(parsed.picker, default.picker);
        assert_eq!(parsed.identify, default.identify);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.picker, WindowSize::default());
        assert_eq!(config.identify, WindowSize::identify_default());
        assert!(config.webdriver.is_none());
        assert!(config.static_host().is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn parses_webdriver_section() {
        let config = Config::from_toml_str(
            r#"
            [webdriver]
            url = "http://localhost:4444"
            start_url = "https://example.com"
            "#,
        )
        .unwrap();
        let webdriver = config.webdriver.unwrap();
        assert_eq!(webdriver.browser, "firefox");
        assert_eq!(webdriver.start_url.as_deref(), Some("https://example.com"));
        assert_eq!(webdriver.session_id, None);
    }

    #[test]
    fn static_layout_picks_flagged_default() {
        let config = Config::from_toml_str(
            r#"
            [[displays]]
            id = "0"
            x = -1920
            y = 0
            width = 1920
            height = 1080

            [[displays]]
            id = "1"
            name = "center"
            x = 0
            y = 0
            width = 2560
            height = 1440
            default = true
            "#,
        )
        .unwrap();
        let host = config.static_host().unwrap();
        let devices = host.devices().unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[1].name, "center");
        assert_eq!(host.default_device(), Some(devices[1].clone()));
    }

    #[test]
    fn static_layout_defaults_to_first() {
        let config = Config::from_toml_str(
            r#"
            [[displays]]
            id = "3"
            x = 0
            y = 0
            width = 800
            height = 600
            "#,
        )
        .unwrap();
        let host = config.static_host().unwrap();
        assert_eq!(host.default_device().unwrap().id, "3");
    }

    #[test]
    fn validate_flags_bad_values() {
        let config = Config::from_toml_str(
            r#"
            [picker]
            width = 0
            height = 100

            [webdriver]
            url = "localhost:4444"

            [[displays]]
            id = "left"
            x = 0
            y = 0
            width = 800
            height = 600
            "#,
        )
        .unwrap();
        let issues = config.validate();
        assert_eq!(issues.iter().filter(|i| i.is_error).count(), 2);
        assert_eq!(issues.iter().filter(|i| !i.is_error).count(), 1);
    }

    #[test]
    fn validate_flags_display_outside_coordinate_space() {
        let config = Config::from_toml_str(
            r#"
            [[displays]]
            id = "0"
            x = 2147483000
            y = 0
            width = 2000
            height = 1080
            "#,
        )
        .unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
        assert!(issues[0].message.contains("outside screen coordinates"));
    }

    #[test]
    fn validate_flags_display_too_far_left_for_windows() {
        let config = Config::from_toml_str(
            r#"
            [[displays]]
            id = "0"
            x = -2147483600
            y = 0
            width = 1920
            height = 1080
            "#,
        )
        .unwrap();
        assert!(config.validate().iter().any(|i| i.is_error));
    }

    #[test]
    fn validate_accepts_negative_origins() {
        let config = Config::from_toml_str(
            r#"
            [[displays]]
            id = "0"
            x = -2560
            y = -1440
            width = 2560
            height = 1440
            "#,
        )
        .unwrap();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Config::from_toml_str("[picker\nwidth = 1"),
            Err(Error::Config(_))
        ));
    }
}
