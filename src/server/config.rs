use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, GuildId, RoleId};
use std::path::PathBuf;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::parse_u64_from_string,
};

const DEFAULT_API_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_DOCS_OWNER: &str = "PRACTAcademy";
const DEFAULT_DOCS_REPO: &str = "docs.practa.tech";
const DEFAULT_DOCS_PATH: &str = "docs";
const DEFAULT_DOCS_EXTENSION: &str = ".md";
const DEFAULT_DOCS_CACHE_FILE: &str = "./docs_cache.json";
const DEFAULT_DOCS_WATCH_CRON: &str = "0 */10 * * * *";
const DEFAULT_COUNTDOWN_CRON: &str = "0 * * * * *";

/// Settings for the documentation change watcher.
#[derive(Clone, Debug)]
pub struct DocsConfig {
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub owner: String,
    pub repo: String,
    pub path: String,
    /// Only listing entries whose name ends with this suffix are tracked.
    pub extension: String,
    pub cache_file: PathBuf,
    pub channel_id: Option<ChannelId>,
    pub site_url: Option<String>,
    pub cron: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,
    pub allowed_guild_id: GuildId,

    pub rules_channel_id: Option<ChannelId>,
    pub rules_role_id: Option<RoleId>,
    pub welcome_channel_id: Option<ChannelId>,
    pub monitored_channel_id: Option<ChannelId>,

    pub launch_timestamp: Option<DateTime<Utc>>,
    pub countdown_cron: String,

    pub docs: DocsConfig,

    pub api_addr: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            allowed_guild_id: GuildId::new(required_id("ALLOWED_GUILD_ID")?),
            rules_channel_id: optional_id("RULES_CHANNEL_ID")?.map(ChannelId::new),
            rules_role_id: optional_id("RULES_ROLE_ID")?.map(RoleId::new),
            welcome_channel_id: optional_id("WELCOME_CHANNEL_ID")?.map(ChannelId::new),
            monitored_channel_id: optional_id("MONITORED_CHANNEL_ID")?.map(ChannelId::new),
            launch_timestamp: optional("LAUNCH_TIMESTAMP")
                .map(|value| parse_launch_timestamp("LAUNCH_TIMESTAMP", &value))
                .transpose()?,
            countdown_cron: optional("COUNTDOWN_CRON")
                .unwrap_or_else(|| DEFAULT_COUNTDOWN_CRON.to_string()),
            docs: DocsConfig {
                github_api_url: optional("GITHUB_API_URL")
                    .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
                github_token: optional("GITHUB_TOKEN"),
                owner: optional("DOCS_OWNER").unwrap_or_else(|| DEFAULT_DOCS_OWNER.to_string()),
                repo: optional("DOCS_REPO").unwrap_or_else(|| DEFAULT_DOCS_REPO.to_string()),
                path: optional("DOCS_PATH").unwrap_or_else(|| DEFAULT_DOCS_PATH.to_string()),
                extension: optional("DOCS_EXTENSION")
                    .unwrap_or_else(|| DEFAULT_DOCS_EXTENSION.to_string()),
                cache_file: optional("DOCS_CACHE_FILE")
                    .unwrap_or_else(|| DEFAULT_DOCS_CACHE_FILE.to_string())
                    .into(),
                channel_id: optional_id("DOCS_CHANNEL_ID")?.map(ChannelId::new),
                site_url: optional("DOCS_SITE_URL"),
                cron: optional("DOCS_WATCH_CRON")
                    .unwrap_or_else(|| DEFAULT_DOCS_WATCH_CRON.to_string()),
            },
            api_addr: optional("API_ADDR").unwrap_or_else(|| DEFAULT_API_ADDR.to_string()),
            api_key: optional("API_KEY"),
        })
    }
}

/// Reads a required environment variable.
fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional environment variable, treating empty values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required_id(name: &str) -> Result<u64, AppError> {
    let value = required(name)?;
    parse_id(name, value)
}

fn optional_id(name: &str) -> Result<Option<u64>, AppError> {
    optional(name).map(|value| parse_id(name, value)).transpose()
}

/// Parses a snowflake, rejecting zero since serenity ids are non-zero.
fn parse_id(name: &str, value: String) -> Result<u64, AppError> {
    let id = parse_u64_from_string(value.clone()).map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason: "expected a Discord snowflake".to_string(),
    })?;

    if id == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "snowflake cannot be zero".to_string(),
        }
        .into());
    }

    Ok(id)
}

fn parse_launch_timestamp(name: &str, value: &str) -> Result<DateTime<Utc>, ConfigError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
