// Core structs: Article, FilterSet, ChatId and the error types shared across modules
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A single feed entry. The identifier is the article's URL and is the only
/// thing compared when deduplicating.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub authors: Vec<String>,
}

impl Article {
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

/// Telegram destination: a numeric chat id or a public `@channel` name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{}", id),
            ChatId::Username(name) => write!(f, "{}", name),
        }
    }
}

/// One subscriber's interest profile, validated once when the config is loaded.
#[derive(Debug, Clone)]
pub struct FilterSet {
    pub name: String,
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub destination: ChatId,
    pub quiet: bool,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed responded with status {0}")]
    Status(u16),
    #[error("failed to parse feed: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Telegram API request failed: {0}")]
    Api(String),
    #[error("Telegram API responded [{status}]: {body}")]
    Status { status: u16, body: String },
    #[error("Telegram API timed out")]
    Timeout,
}
