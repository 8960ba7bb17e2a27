use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::error::{BarSwapError, BarSwapResult};

// ─── Embedded Default ────────────────────────────────────────────────────
/// Baked into the binary at compile time. The app can never crash due to a
/// missing config file — this is always available as the base layer.
const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

// ─── CLI Arguments (override layer) ─────────────────────────────────────
/// barswap — stacked bars that swap in sequence when tapped
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "barswap", version, about, long_about = None)]
pub struct CliArgs {
    /// Log level filter (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Delay between animation frames in milliseconds (overrides config file)
    #[arg(short, long)]
    pub delay: Option<u64>,

    /// Disable mouse taps (overrides config file)
    #[arg(long)]
    pub no_mouse: bool,

    /// Path to a custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the default config to stdout and exit
    #[arg(long)]
    pub print_default_config: bool,
}

// ─── TOML Structs ───────────────────────────────────────────────────────

/// Root configuration — parsed from TOML, then overridden by CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Pause between steady-state frames (milliseconds)
    pub tick_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub background: Color,

    /// One-line hint/status footer
    pub show_status_bar: bool,

    /// Treat mouse presses as taps
    pub mouse: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub tap: String,
    pub quit: String,
}

// ─── Defaults ───────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        // Parse the embedded TOML — this cannot fail since we control it
        toml::from_str(DEFAULT_CONFIG_TOML)
            .expect("BUG: embedded default_config.toml is invalid TOML")
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { tick_delay_ms: 20 }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0xBD, 0xBD, 0xBD),
            show_status_bar: true,
            mouse: true,
        }
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            tap: "space".into(),
            quit: "q".into(),
        }
    }
}

// ─── Color Deserializer ─────────────────────────────────────────────────

fn deserialize_color<'de, D>(deserializer: D) -> std::result::Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: \"{s}\"")))
}

/// Parse a color string into a ratatui Color.
/// Supports: named colors, "reset", "#RRGGBB" hex.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();
    match s.as_str() {
        "reset" | "default" | "transparent" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        hex if hex.len() == 7
            && hex.starts_with('#')
            && hex[1..].chars().all(|c| c.is_ascii_hexdigit()) =>
        {
            let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
            let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
            let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

// ─── Key Bindings ───────────────────────────────────────────────────────

/// Parse a binding like `"space"`, `"enter"` or `"q"` into a key code
pub fn parse_key(s: &str) -> BarSwapResult<KeyCode> {
    let lower = s.trim().to_lowercase();
    let code = match lower.as_str() {
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "esc" | "escape" => KeyCode::Esc,
        _ => {
            let mut chars = s.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(BarSwapError::Config(format!("unknown key: \"{s}\""))),
            }
        }
    };
    Ok(code)
}

/// Does `key` trigger the binding `code`? Bindings ignore Shift only.
pub fn key_matches(code: KeyCode, key: &KeyEvent) -> bool {
    let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
    key.code == code && modifiers.is_empty()
}

/// Key codes resolved once at startup
#[derive(Debug, Clone)]
pub struct Bindings {
    pub tap: KeyCode,
    pub quit: KeyCode,
    /// Display labels for the status bar
    pub tap_label: String,
    pub quit_label: String,
}

impl KeysConfig {
    pub fn resolve(&self) -> BarSwapResult<Bindings> {
        Ok(Bindings {
            tap: parse_key(&self.tap)?,
            quit: parse_key(&self.quit)?,
            tap_label: self.tap.clone(),
            quit_label: self.quit.clone(),
        })
    }
}

// ─── Path Resolution ────────────────────────────────────────────────────

impl Config {
    /// Standard config file path: ~/.config/barswap/config.toml
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("barswap")
            .join("config.toml")
    }

    /// Log directory: ~/.local/share/barswap/
    pub fn log_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("barswap")
    }

    /// Delay between steady-state animation frames
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.animation.tick_delay_ms)
    }

    /// Reject settings the animation cannot run with
    pub fn validate(&self) -> BarSwapResult<()> {
        if self.animation.tick_delay_ms == 0 {
            return Err(BarSwapError::Config(
                "animation.tick_delay_ms must be at least 1".into(),
            ));
        }
        self.keys.resolve()?;
        Ok(())
    }

    /// Apply CLI flags on top of the file values
    pub fn apply_cli(&mut self, cli: &CliArgs) {
        if let Some(ref level) = cli.log_level {
            self.general.log_level = level.clone();
        }
        if let Some(delay) = cli.delay {
            self.animation.tick_delay_ms = delay;
        }
        if cli.no_mouse {
            self.appearance.mouse = false;
        }
    }
}

// ─── Bootloader ─────────────────────────────────────────────────────────

/// The single entry point for configuration. Called exactly once at startup.
///
/// 1. Resolve config file path (CLI override or default)
/// 2. If config file doesn't exist, create directory tree + write defaults
/// 3. Parse TOML from disk into Config
/// 4. Apply CLI overrides on top, then validate
pub fn load(cli: &CliArgs) -> Result<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Bootstrap: ensure the file exists on disk
    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).wrap_err_with(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(&config_path, DEFAULT_CONFIG_TOML).wrap_err_with(|| {
            format!(
                "Failed to write default config to {}",
                config_path.display()
            )
        })?;
        info!("Created default config at {}", config_path.display());
    }

    let toml_str = std::fs::read_to_string(&config_path)
        .wrap_err_with(|| format!("Failed to read config from {}", config_path.display()))?;

    let mut config: Config = toml::from_str(&toml_str).wrap_err_with(|| {
        format!(
            "Failed to parse config at {}.\n\
             Delete the file to regenerate defaults, or run:\n  \
             barswap --print-default-config > {:?}",
            config_path.display(),
            config_path
        )
    })?;

    config.apply_cli(cli);
    config
        .validate()
        .wrap_err_with(|| format!("Invalid config at {}", config_path.display()))?;

    Ok(config)
}

/// Open `barswap.log` in `dir` for appending, creating the directory if needed
pub fn open_log_file(dir: &Path) -> BarSwapResult<File> {
    std::fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("barswap.log"))?;
    Ok(file)
}

/// Returns the embedded default config TOML string.
pub fn default_config_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_parses() {
        let config = Config::default();
        assert_eq!(config.animation.tick_delay_ms, 20);
        assert_eq!(config.appearance.background, Color::Rgb(0xBD, 0xBD, 0xBD));
        assert!(config.appearance.mouse);
        assert_eq!(config.keys.tap, "space");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("[animation]\ntick_delay_ms = 40\n").unwrap();
        assert_eq!(config.tick_delay(), Duration::from_millis(40));
        assert_eq!(config.keys.quit, "q");
        assert!(config.appearance.show_status_bar);
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = toml::from_str::<Config>("[appearance]\nbackground = \"#12\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn non_ascii_hex_color_is_rejected() {
        // Seven bytes, but not seven ASCII characters
        assert_eq!(parse_color("#1é234"), None);
        let err = toml::from_str::<Config>("[appearance]\nbackground = \"#1é234\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn cli_overrides_file() {
        let mut config = Config::default();
        let cli = CliArgs {
            log_level: Some("debug".into()),
            delay: Some(5),
            no_mouse: true,
            ..Default::default()
        };
        config.apply_cli(&cli);
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.animation.tick_delay_ms, 5);
        assert!(!config.appearance.mouse);
    }

    #[test]
    fn zero_delay_is_invalid() {
        let mut config = Config::default();
        config.animation.tick_delay_ms = 0;
        assert!(matches!(config.validate(), Err(BarSwapError::Config(_))));
    }

    #[test]
    fn log_file_is_created_in_fresh_dir() {
        let dir = std::env::temp_dir().join(format!("barswap-log-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        assert!(open_log_file(&dir).is_ok());
        assert!(dir.join("barswap.log").exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn log_dir_under_a_file_is_an_error() {
        let blocker = std::env::temp_dir().join(format!("barswap-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"").unwrap();
        let err = open_log_file(&blocker.join("logs"));
        assert!(matches!(err, Err(BarSwapError::Io(_))));
        std::fs::remove_file(&blocker).ok();
    }

    #[test]
    fn parses_key_names() {
        assert_eq!(parse_key("space").unwrap(), KeyCode::Char(' '));
        assert_eq!(parse_key("Enter").unwrap(), KeyCode::Enter);
        assert_eq!(parse_key("q").unwrap(), KeyCode::Char('q'));
        assert!(parse_key("hyper").is_err());
    }

    #[test]
    fn key_match_ignores_shift_only() {
        let code = KeyCode::Char('Q');
        assert!(key_matches(code, &KeyEvent::new(code, KeyModifiers::SHIFT)));
        assert!(!key_matches(code, &KeyEvent::new(code, KeyModifiers::CONTROL)));
    }

    #[test]
    fn hex_and_named_colors() {
        assert_eq!(parse_color("#3f51b5"), Some(Color::Rgb(0x3F, 0x51, 0xB5)));
        assert_eq!(parse_color(" Cyan "), Some(Color::Cyan));
        assert_eq!(parse_color("#zzzzzz"), None);
    }
}
