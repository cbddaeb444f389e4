//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kubeclaw-nav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::LayoutMode;
use crate::core::controller::NavSettings;
use crate::core::site::{NavLink, SiteNav, default_links};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavConfig {
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub drawer: DrawerConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub nav: NavLinksConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HeaderConfig {
    pub hide_threshold: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DrawerConfig {
    pub transition_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScrollConfig {
    pub frame_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub breakpoint_columns: Option<u16>,
    pub force: Option<LayoutMode>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavLinksConfig {
    #[serde(default)]
    pub links: Vec<NavLink>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HIDE_THRESHOLD: u32 = crate::core::visibility::DEFAULT_HIDE_THRESHOLD;
pub const DEFAULT_TRANSITION_MS: u64 = 200;
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
/// Terminal columns below which the mobile layout is used.
pub const DEFAULT_BREAKPOINT_COLUMNS: u16 = 80;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub hide_threshold: u32,
    pub transition: Duration,
    pub frame_interval: Duration,
    pub breakpoint_columns: u16,
    pub layout_mode: LayoutMode,
    pub links: Vec<NavLink>,
}

impl ResolvedConfig {
    pub fn settings(&self) -> NavSettings {
        NavSettings {
            hide_threshold: self.hide_threshold,
            transition: self.transition,
            frame_interval: self.frame_interval,
        }
    }

    pub fn site(&self) -> SiteNav {
        SiteNav::new(self.links.clone())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl NavConfig {
    /// Reject values that would stall the drawer, disable scroll coalescing,
    /// or break the layout switch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drawer.transition_ms == Some(0) {
            return Err(ConfigError::Invalid("drawer.transition_ms must be > 0".to_string()));
        }
        if self.scroll.frame_interval_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "scroll.frame_interval_ms must be > 0".to_string(),
            ));
        }
        if self.layout.breakpoint_columns == Some(0) {
            return Err(ConfigError::Invalid(
                "layout.breakpoint_columns must be > 0".to_string(),
            ));
        }
        let mut ids: Vec<u32> = self.nav.links.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        if ids.windows(2).any(|w| w[0] == w[1]) {
            return Err(ConfigError::Invalid("nav.links ids must be unique".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.kubeclaw-nav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kubeclaw-nav").join("config.toml"))
}

/// Load config from `~/.kubeclaw-nav/config.toml`.
pub fn load_config() -> Result<NavConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(NavConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavConfig::default()`. If it exists but is malformed or
/// invalid, returns the matching `ConfigError`.
pub fn load_config_from(path: &Path) -> Result<NavConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(NavConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    config.validate()?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# kubeclaw-nav Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [header]
# hide_threshold = 10          # Header always shown above this scroll offset

# [drawer]
# transition_ms = 200          # Enter/exit animation window

# [scroll]
# frame_interval_ms = 16       # Scroll updates are coalesced to one per frame

# [layout]
# breakpoint_columns = 80      # Narrower terminals get the mobile drawer
# force = "auto"               # "auto", "desktop" or "mobile"

# [[nav.links]]
# id = 1
# name = "Features"
# href = "#features"
#
# [[nav.links.submenu]]
# id = 1
# name = "Secure Sandboxing"
# href = "#features"
# description = "Isolated container execution"

# [[nav.links]]
# id = 2
# name = "FAQ"
# href = "#faq"
"##;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_layout` comes from the `--layout` flag (None = not specified).
pub fn resolve(config: &NavConfig, cli_layout: Option<LayoutMode>) -> ResolvedConfig {
    // Threshold: env → config → default
    let hide_threshold = env_parse("KUBECLAW_NAV_HIDE_THRESHOLD")
        .or(config.header.hide_threshold)
        .unwrap_or(DEFAULT_HIDE_THRESHOLD);

    // Transition: env → config → default, zero is never accepted
    let transition_ms = env_parse::<u64>("KUBECLAW_NAV_TRANSITION_MS")
        .filter(|ms| *ms > 0)
        .or(config.drawer.transition_ms)
        .unwrap_or(DEFAULT_TRANSITION_MS);

    let frame_interval_ms = config
        .scroll
        .frame_interval_ms
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_FRAME_INTERVAL_MS);

    let breakpoint_columns = env_parse::<u16>("KUBECLAW_NAV_BREAKPOINT")
        .filter(|c| *c > 0)
        .or(config.layout.breakpoint_columns)
        .unwrap_or(DEFAULT_BREAKPOINT_COLUMNS);

    // Layout: CLI → env → config → auto
    let layout_mode = cli_layout
        .or_else(|| {
            std::env::var("KUBECLAW_NAV_LAYOUT")
                .ok()
                .and_then(|s| LayoutMode::parse(&s))
        })
        .or(config.layout.force)
        .unwrap_or_default();

    let links = if config.nav.links.is_empty() {
        default_links()
    } else {
        config.nav.links.clone()
    };

    ResolvedConfig {
        hide_threshold,
        transition: Duration::from_millis(transition_ms),
        frame_interval: Duration::from_millis(frame_interval_ms),
        breakpoint_columns,
        layout_mode,
        links,
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparsable {}={:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = NavConfig::default();
        assert!(config.nav.links.is_empty());
        assert!(config.header.hide_threshold.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = NavConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.frame_interval, Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS));
        assert_eq!(resolved.links.len(), 5);
        assert_eq!(resolved.site().links[0].name, "Features");
    }

    #[test]
    fn test_resolve_cli_layout_wins() {
        let config = NavConfig {
            layout: LayoutConfig {
                force: Some(LayoutMode::Desktop),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(LayoutMode::Mobile));
        assert_eq!(resolved.layout_mode, LayoutMode::Mobile);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r##"
[header]
hide_threshold = 4

[drawer]
transition_ms = 350

[layout]
breakpoint_columns = 100
force = "mobile"

[[nav.links]]
id = 1
name = "Platform"
href = "#platform"

[[nav.links.submenu]]
id = 1
name = "Scheduler"
href = "#scheduler"

[[nav.links]]
id = 2
name = "Pricing"
href = "#pricing"
"##;
        let config: NavConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.header.hide_threshold, Some(4));
        assert_eq!(config.drawer.transition_ms, Some(350));
        assert_eq!(config.layout.force, Some(LayoutMode::Mobile));
        assert_eq!(config.nav.links.len(), 2);
        assert_eq!(config.nav.links[0].submenu.len(), 1);
        assert_eq!(config.nav.links[0].submenu[0].description, None);
        assert!(config.nav.links[1].submenu.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[scroll]
frame_interval_ms = 33
"#;
        let config: NavConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scroll.frame_interval_ms, Some(33));
        assert!(config.drawer.transition_ms.is_none());
        assert!(config.layout.force.is_none());
    }

    #[test]
    fn test_zero_transition_is_invalid() {
        let config = NavConfig {
            drawer: DrawerConfig {
                transition_ms: Some(0),
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_frame_interval_is_invalid() {
        let toml_str = r#"
[scroll]
frame_interval_ms = 0
"#;
        let config: NavConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("frame_interval_ms")));
    }

    #[test]
    fn test_duplicate_link_ids_are_invalid() {
        let mut config = NavConfig::default();
        config.nav.links = default_links();
        config.nav.links[1].id = 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("kubeclaw-nav-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.nav.links.is_empty());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# kubeclaw-nav Configuration"));

        // The generated file is all comments, so it loads as defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.header.hide_threshold.is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
