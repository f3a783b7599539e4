use crate::model::{ChatId, FilterSet};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/arxiv-update-bot/config.json";
pub const DEFAULT_FEED_URL: &str = "https://export.arxiv.org/rss/{category}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a bot section must be in the configuration file to set the token")]
    MissingBotSection,
    #[error("the bot section must have the bot token")]
    MissingToken,
    #[error("filter #{index} ({name}) is not complete: missing `{field}`")]
    IncompleteFilter {
        index: usize,
        name: String,
        field: &'static str,
    },
}

/// A list given either as a JSON array or as a comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListField {
    Items(Vec<String>),
    Csv(String),
}

impl ListField {
    fn into_items(self) -> Vec<String> {
        let raw = match self {
            ListField::Items(items) => items,
            ListField::Csv(csv) => csv.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct RawBotConfig {
    token: Option<String>,
    feed_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFilterConfig {
    name: Option<String>,
    category: Option<ListField>,
    chat_id: Option<ChatId>,
    buzzwords: Option<ListField>,
    authors: Option<ListField>,
    #[serde(default)]
    quiet: bool,
}

#[derive(Debug, Deserialize)]
struct RawAppConfig {
    bot: Option<RawBotConfig>,
    #[serde(default)]
    filters: Vec<RawFilterConfig>,
}

#[derive(Debug)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub feed_url: String,
    pub filters: Vec<FilterSet>,
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let raw: RawAppConfig = serde_json::from_str(content)?;

    let bot = raw.bot.ok_or(ConfigError::MissingBotSection)?;
    let token = bot
        .token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(ConfigError::MissingToken)?;

    let filters = raw
        .filters
        .into_iter()
        .enumerate()
        .map(|(index, filter)| validate_filter(index, filter))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AppConfig {
        telegram_bot_token: token,
        feed_url: bot.feed_url.unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
        filters,
    })
}

fn validate_filter(index: usize, raw: RawFilterConfig) -> Result<FilterSet, ConfigError> {
    let name = raw.name.unwrap_or_else(|| format!("filter-{}", index + 1));
    let incomplete = |field: &'static str| ConfigError::IncompleteFilter {
        index,
        name: name.clone(),
        field,
    };

    let categories = raw
        .category
        .map(ListField::into_items)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| incomplete("category"))?;
    let destination = raw.chat_id.ok_or_else(|| incomplete("chat_id"))?;
    let keywords = raw
        .buzzwords
        .map(ListField::into_items)
        .ok_or_else(|| incomplete("buzzwords"))?;
    let authors = raw.authors.map(ListField::into_items).unwrap_or_default();

    Ok(FilterSet {
        name,
        categories,
        keywords,
        authors,
        destination,
        quiet: raw.quiet,
    })
}
