//! Configuration management
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config/medcall.toml`, `MEDCALL__SECTION__KEY` environment variables, and
//! finally the conventional provider variables (`TWILIO_ACCOUNT_SID`,
//! `TWILIO_AUTH_TOKEN`, `TWILIO_PHONE_NUMBER`, `SERVER_URL`, `DATABASE_URL`,
//! `PORT`).

use config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::infrastructure::telephony::twilio::DEFAULT_API_BASE_URL;

/// Optional configuration file, relative to the working directory
const CONFIG_FILE: &str = "config/medcall";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub twilio: TwilioSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Externally reachable base URL the provider calls back on
    pub public_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TwilioSettings {
    pub account_sid: String,
    pub auth_token: String,
    /// Caller id for calls and sender for SMS
    pub from_number: String,
    pub api_base_url: String,
}

impl std::fmt::Debug for TwilioSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioSettings")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"****")
            .field("from_number", &self.from_number)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                public_url: "http://localhost:5000".to_string(),
            },
            database: DatabaseSettings {
                url: "postgres://localhost/medcall".to_string(),
                max_connections: 10,
                min_connections: 1,
                connect_timeout_secs: 5,
                idle_timeout_secs: 600,
            },
            twilio: TwilioSettings {
                account_sid: String::new(),
                auth_token: String::new(),
                from_number: String::new(),
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
            },
        }
    }
}

/// Conventional variable names mapped onto config keys
const ENV_OVERRIDES: [(&str, &str); 6] = [
    ("TWILIO_ACCOUNT_SID", "twilio.account_sid"),
    ("TWILIO_AUTH_TOKEN", "twilio.auth_token"),
    ("TWILIO_PHONE_NUMBER", "twilio.from_number"),
    ("SERVER_URL", "server.public_url"),
    ("DATABASE_URL", "database.url"),
    ("PORT", "server.port"),
];

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load configuration, resolving conventional variables through `lookup`
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = config::Config::try_from(&Config::default())?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix("MEDCALL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(key, lookup(var))?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the relay cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("twilio.account_sid (TWILIO_ACCOUNT_SID)", &self.twilio.account_sid),
            ("twilio.auth_token (TWILIO_AUTH_TOKEN)", &self.twilio.auth_token),
            ("twilio.from_number (TWILIO_PHONE_NUMBER)", &self.twilio.from_number),
            ("server.public_url (SERVER_URL)", &self.server.public_url),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!("{} is missing", name)));
            }
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
