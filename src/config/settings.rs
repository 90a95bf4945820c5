//! TOML-based configuration for schemascope.
//!
//! Supports a config file (schemascope.toml) with environment variable
//! expansion.
//!
//! Example configuration:
//! ```toml
//! [connections.production]
//! driver = "sqlite"
//! path = "${PROD_DB_PATH}"
//!
//! [connections.dev]
//! driver = "sqlite"
//! path = "./data/dev.db"
//!
//! [crawl]
//! info_level = "detailed"
//! include_tables = "public\\..*"
//! exclude_tables = ".*\\.audit_.*"
//! child_table_depth = 1
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::crawl::{CrawlOptions, InfoLevel};
use crate::filter::InclusionRule;

use super::connection::{ConnectionConfig, Driver};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    #[error("Unsupported driver: {0}")]
    UnsupportedDriver(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Named database connections.
    pub connections: HashMap<String, ConnectionSettings>,

    /// Crawl defaults.
    pub crawl: CrawlSettings,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Look up a named connection.
    pub fn connection(&self, name: &str) -> Result<&ConnectionSettings, SettingsError> {
        self.connections
            .get(name)
            .ok_or_else(|| SettingsError::ConnectionNotFound(name.to_string()))
    }
}

/// Connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionSettings {
    /// Database driver (sqlite).
    pub driver: String,

    /// Database path (supports `${ENV_VAR}` expansion).
    pub path: String,
}

impl ConnectionSettings {
    /// Get the driver type.
    pub fn driver_type(&self) -> Result<Driver, SettingsError> {
        Driver::from_str(&self.driver)
            .map_err(|_| SettingsError::UnsupportedDriver(self.driver.clone()))
    }

    /// Get the path with environment variables expanded.
    pub fn resolved_path(&self) -> Result<String, SettingsError> {
        expand_env_vars(&self.path)
    }

    /// Convert into a connection config.
    pub fn to_connection_config(&self) -> Result<ConnectionConfig, SettingsError> {
        Ok(ConnectionConfig {
            driver: self.driver_type()?,
            path: self.resolved_path()?,
        })
    }
}

/// Crawl defaults from the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CrawlSettings {
    /// Info level preset: "minimum", "standard", "detailed", "maximum".
    pub info_level: String,

    /// Regular-expression include/exclude pairs per object kind.
    pub include_schemas: Option<String>,
    pub exclude_schemas: Option<String>,
    pub include_tables: Option<String>,
    pub exclude_tables: Option<String>,
    pub include_columns: Option<String>,
    pub exclude_columns: Option<String>,
    pub include_routines: Option<String>,
    pub exclude_routines: Option<String>,

    /// Levels of referenced (parent) tables kept around matched tables.
    pub parent_table_depth: usize,
    /// Levels of referencing (child) tables kept.
    pub child_table_depth: usize,
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self {
            info_level: "standard".to_string(),
            include_schemas: None,
            exclude_schemas: None,
            include_tables: None,
            exclude_tables: None,
            include_columns: None,
            exclude_columns: None,
            include_routines: None,
            exclude_routines: None,
            parent_table_depth: 0,
            child_table_depth: 0,
        }
    }
}

impl CrawlSettings {
    /// Resolve the info level preset.
    pub fn info_level(&self) -> Result<InfoLevel, SettingsError> {
        match self.info_level.to_lowercase().as_str() {
            "minimum" => Ok(InfoLevel::minimum()),
            "standard" => Ok(InfoLevel::standard()),
            "detailed" => Ok(InfoLevel::detailed()),
            "maximum" => Ok(InfoLevel::maximum()),
            other => Err(SettingsError::InvalidConfig(format!(
                "unknown info level: {other}"
            ))),
        }
    }

    /// Build crawl options from these settings.
    pub fn to_crawl_options(&self) -> Result<CrawlOptions, SettingsError> {
        let mut options = CrawlOptions::with_info_level(self.info_level()?);
        options.schema_rule = InclusionRule::from_patterns(
            self.include_schemas.as_deref(),
            self.exclude_schemas.as_deref(),
        )?;
        options.table_rule = InclusionRule::from_patterns(
            self.include_tables.as_deref(),
            self.exclude_tables.as_deref(),
        )?;
        options.column_rule = InclusionRule::from_patterns(
            self.include_columns.as_deref(),
            self.exclude_columns.as_deref(),
        )?;
        options.routine_rule = InclusionRule::from_patterns(
            self.include_routines.as_deref(),
            self.exclude_routines.as_deref(),
        )?;
        options.parent_table_depth = self.parent_table_depth;
        options.child_table_depth = self.child_table_depth;
        Ok(options)
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            // Check for ${VAR} or $VAR
            if chars.peek() == Some(&'{') {
                chars.next(); // consume '{'
                let mut var_name = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch == '}' {
                        chars.next(); // consume '}'
                        break;
                    }
                    var_name.push(ch);
                    chars.next();
                }
                let value = env::var(&var_name)
                    .map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
                result.push_str(&value);
            } else {
                // $VAR (ends at non-alphanumeric/underscore)
                let mut var_name = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' {
                        var_name.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if var_name.is_empty() {
                    // Just a lone $, keep it
                    result.push('$');
                } else {
                    let value = env::var(&var_name)
                        .map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
                    result.push_str(&value);
                }
            }
        } else {
            result.push(c);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_vars_braces() {
        env::set_var("SCOPE_TEST_VAR", "hello");
        assert_eq!(expand_env_vars("${SCOPE_TEST_VAR}").unwrap(), "hello");
        assert_eq!(
            expand_env_vars("prefix_${SCOPE_TEST_VAR}_suffix").unwrap(),
            "prefix_hello_suffix"
        );
        env::remove_var("SCOPE_TEST_VAR");
    }

    #[test]
    fn test_expand_env_vars_no_braces() {
        env::set_var("SCOPE_TEST_VAR2", "world");
        assert_eq!(expand_env_vars("$SCOPE_TEST_VAR2").unwrap(), "world");
        assert_eq!(expand_env_vars("$SCOPE_TEST_VAR2!").unwrap(), "world!");
        env::remove_var("SCOPE_TEST_VAR2");
    }

    #[test]
    fn test_expand_env_vars_missing() {
        assert!(expand_env_vars("${SCOPE_NO_SUCH_VAR}").is_err());
    }

    #[test]
    fn test_parse_settings() {
        let settings = Settings::from_toml(
            r#"
            [connections.dev]
            driver = "sqlite"
            path = "./dev.db"

            [crawl]
            info_level = "detailed"
            include_tables = "main\\..*"
            child_table_depth = 1
            "#,
        )
        .unwrap();

        let connection = settings.connection("dev").unwrap();
        assert_eq!(connection.driver_type().unwrap(), Driver::Sqlite);

        let options = settings.crawl.to_crawl_options().unwrap();
        assert!(options.info_level.retrieve_triggers);
        assert_eq!(options.child_table_depth, 1);
        assert!(options.table_rule.test("main.orders"));
        assert!(!options.table_rule.test("temp.orders"));
    }

    #[test]
    fn test_unknown_info_level() {
        let crawl = CrawlSettings {
            info_level: "everything".to_string(),
            ..CrawlSettings::default()
        };
        assert!(crawl.info_level().is_err());
    }
}
