use crate::icon::IconName;
use directories::ProjectDirs;
use rondo_dial::{ConfigurationError, DialConfig, RouteId, RouteTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Destination {
    pub route: RouteId,
    pub label: String,
    #[serde(default)]
    pub icon: Option<IconName>,
}

impl Destination {
    fn new(route: &str, label: &str, icon: &str) -> Self {
        Self {
            route: RouteId::from(route),
            label: label.to_string(),
            icon: Some(IconName::from(icon)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// `button_count` is ignored here; it always follows `destinations`.
    #[serde(default)]
    pub dial: DialConfig,
    #[serde(default = "default_destinations")]
    pub destinations: Vec<Destination>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dial: DialConfig::default(),
            destinations: default_destinations(),
        }
    }
}

fn default_destinations() -> Vec<Destination> {
    vec![
        Destination::new("home", "Home", "go-home"),
        Destination::new("search", "Search", "system-search"),
        Destination::new("inbox", "Inbox", "mail-unread"),
        Destination::new("profile", "Profile", "avatar-default"),
    ]
}

impl Config {
    pub fn dial_config(&self) -> DialConfig {
        DialConfig {
            button_count: self.destinations.len(),
            ..self.dial.clone()
        }
    }

    pub fn routes(&self) -> RouteTable {
        self.destinations.iter().map(|d| d.route.clone()).collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dial_config().validate()?;

        let mut seen = HashSet::new();
        if let Some(dup) = self.destinations.iter().find(|d| !seen.insert(&d.route)) {
            return Err(ConfigError::DuplicateRoute(dup.route.clone()));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid dial: {0}")]
    Dial(#[from] ConfigurationError),
    #[error("Route '{0}' is listed more than once")]
    DuplicateRoute(RouteId),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "rondo", "rondo").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn load_config(config_path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("RONDO")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let config: Config = s.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

/// Loads the user's config, creating the default file on first run. Never
/// fails: anything unusable falls back to the built-in defaults.
pub fn load_or_setup() -> Config {
    match get_config_path() {
        Ok(path) => load_or_setup_at(&path),
        Err(e) => {
            log::error!("{}, using defaults", e);
            Config::default()
        }
    }
}

fn load_or_setup_at(path: &Path) -> Config {
    if !path.exists() {
        match write_default_config_at(path) {
            Ok(()) => log::info!("Wrote default configuration to {}", path.display()),
            Err(e) => log::warn!("Failed to write default configuration: {}", e),
        }
    }

    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

fn write_default_config_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use rondo_dial::{DragModel, Easing};
    use std::time::Duration;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = parse(DEFAULT_CONFIG);
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let config = parse(
            r#"
            [dial]
            circle_radius = 200
            tap_duration_ms = 450
            tap_easing = "linear"
            drag_model = "tangent"

            [[destinations]]
            route = "a"
            label = "A"

            [[destinations]]
            route = "b"
            label = "B"
            icon = "/usr/share/icons/b.png"

            [[destinations]]
            route = "c"
            label = "C"
            "#,
        );

        assert_eq!(config.dial.circle_radius, 200.0);
        assert_eq!(config.dial.tap_duration, Duration::from_millis(450));
        assert_eq!(config.dial.tap_easing, Easing::Linear);
        assert_eq!(config.dial.drag_model, DragModel::Tangent);
        assert_eq!(config.destinations[0].icon, None);
        assert_eq!(config.dial_config().button_count, 3);
        assert_eq!(config.routes().get(2), Some(&RouteId::from("c")));
    }

    #[test]
    fn test_missing_destinations_use_defaults() {
        let config = parse("[dial]\ncircle_radius = 150.0\n");
        assert_eq!(config.destinations, default_destinations());
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        config.destinations.truncate(1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Dial(ConfigurationError::TooFewButtons(1)))
        ));

        let mut config = Config::default();
        config.destinations[2].route = RouteId::from("home");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateRoute(route)) if route.as_str() == "home"
        ));
    }

    #[test]
    fn test_first_run_writes_default_and_applies_env() {
        let dir = std::env::temp_dir().join(format!("rondo-first-run-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs_err::remove_dir_all(&dir);

        // Only this test reads RONDO_* variables.
        unsafe { std::env::set_var("RONDO_DIAL__CIRCLE_RADIUS", "150") };
        let config = load_or_setup_at(&path);
        unsafe { std::env::remove_var("RONDO_DIAL__CIRCLE_RADIUS") };

        assert_eq!(fs_err::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert_eq!(config.dial.circle_radius, 150.0);
        assert_eq!(config.destinations, default_destinations());

        let _ = fs_err::remove_dir_all(&dir);
    }

    #[test]
    fn test_destination_deserialization() {
        let json = r#"{"route": "inbox", "label": "Inbox", "icon": "mail-unread"}"#;
        let destination: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(destination, Destination::new("inbox", "Inbox", "mail-unread"));
    }
}
