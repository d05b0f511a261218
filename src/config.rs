//! Persistent application configuration model and defaults.

/// Root configuration persisted to `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    #[serde(default)]
    /// Owner identity used to scope playlists.
    pub session: SessionConfig,
    #[serde(default)]
    /// Database location and connection tuning.
    pub database: DatabaseConfig,
    #[serde(default)]
    /// Window and dialog preferences.
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Playlist owner. Any non-blank string is accepted; nothing authenticates it.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SessionConfig {
    #[serde(default = "default_username")]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DatabaseConfig {
    /// SQLite file path. Blank selects `<data_dir>/playlist_tracker/tracker.db`.
    #[serde(default)]
    pub path: String,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UiConfig {
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Show a confirmation dialog after each successful add/delete.
    #[serde(default = "default_true")]
    pub show_success_dialogs: bool,
}

#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            show_success_dialogs: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_username() -> String {
    "guest".to_string()
}

fn default_busy_timeout_ms() -> u32 {
    2_000
}

fn default_window_width() -> u32 {
    600
}

fn default_window_height() -> u32 {
    400
}

/// Clamps numeric settings into usable ranges and fills blank identity fields.
pub fn sanitize_config(config: Config) -> Config {
    let username = config.session.username.trim();
    let username = if username.is_empty() {
        default_username()
    } else {
        username.to_string()
    };

    Config {
        session: SessionConfig { username },
        database: DatabaseConfig {
            path: config.database.path.trim().to_string(),
            busy_timeout_ms: config.database.busy_timeout_ms.min(60_000),
        },
        ui: UiConfig {
            window_width: config.ui.window_width.clamp(320, 3840),
            window_height: config.ui.window_height.clamp(240, 2160),
            show_success_dialogs: config.ui.show_success_dialogs,
        },
        logging: config.logging,
    }
}

#[cfg(test)]
mod tests {
    use super::{sanitize_config, Config, DatabaseConfig, LogLevel, SessionConfig, UiConfig};

    #[test]
    fn test_default_config_has_expected_values() {
        let config = Config::default();

        assert_eq!(config.session.username, "guest");
        assert!(config.database.path.is_empty());
        assert_eq!(config.database.busy_timeout_ms, 2_000);
        assert_eq!(config.ui.window_width, 600);
        assert_eq!(config.ui.window_height, 400);
        assert!(config.ui.show_success_dialogs);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_partial_config_deserialization_fills_defaults() {
        let partial_toml = r#"
[session]
username = "alice"
"#;

        let parsed: Config = toml::from_str(partial_toml).expect("config should parse");
        assert_eq!(parsed.session.username, "alice");
        assert_eq!(parsed.database, DatabaseConfig::default());
        assert_eq!(parsed.ui, UiConfig::default());
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_log_level_parses_snake_case() {
        let parsed: Config =
            toml::from_str("[logging]\nlevel = \"debug\"\n").expect("config should parse");
        assert_eq!(parsed.logging.level, LogLevel::Debug);
        assert_eq!(
            parsed.logging.level.to_level_filter(),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_system_config_template_matches_default_values() {
        let parsed: Config = toml::from_str(include_str!("../config/config.system.toml"))
            .expect("system config template should parse");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_sanitize_config_clamps_window_and_timeout() {
        let input = Config {
            database: DatabaseConfig {
                path: "  /tmp/tracker.db ".to_string(),
                busy_timeout_ms: 900_000,
            },
            ui: UiConfig {
                window_width: 10,
                window_height: 99_999,
                show_success_dialogs: false,
            },
            ..Config::default()
        };

        let sanitized = sanitize_config(input);
        assert_eq!(sanitized.database.path, "/tmp/tracker.db");
        assert_eq!(sanitized.database.busy_timeout_ms, 60_000);
        assert_eq!(sanitized.ui.window_width, 320);
        assert_eq!(sanitized.ui.window_height, 2160);
        assert!(!sanitized.ui.show_success_dialogs);
    }

    #[test]
    fn test_sanitize_config_replaces_blank_username() {
        let input = Config {
            session: SessionConfig {
                username: "   ".to_string(),
            },
            ..Config::default()
        };
        assert_eq!(sanitize_config(input).session.username, "guest");

        let input = Config {
            session: SessionConfig {
                username: " alice ".to_string(),
            },
            ..Config::default()
        };
        assert_eq!(sanitize_config(input).session.username, "alice");
    }
}
