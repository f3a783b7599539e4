// In-memory collaborators for unit tests.
use crate::model::{Article, ChatId, FetchError, NotifyError};
use crate::notifier::Notifier;
use crate::source::ArticleSource;
use crate::utils::Clock;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn on(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

pub fn article(id: &str, title: &str, summary: &str, authors: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
    }
}

/// Serves canned articles per category and records every fetch.
#[derive(Default)]
pub struct StubSource {
    feeds: HashMap<String, Vec<Article>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: &str, articles: Vec<Article>) -> Self {
        self.feeds.insert(category.to_string(), articles);
        self
    }

    pub fn failing(mut self, category: &str) -> Self {
        self.failing.insert(category.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ArticleSource for StubSource {
    async fn fetch(&self, category: &str) -> Result<Vec<Article>, FetchError> {
        self.calls.lock().unwrap().push(category.to_string());
        if self.failing.contains(category) {
            return Err(FetchError::Status(503));
        }
        Ok(self.feeds.get(category).cloned().unwrap_or_default())
    }
}

/// Records sent messages; fails sends whose text contains `fail_on`.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(ChatId, String)>>,
    fail_on: Option<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_on: Some(marker.to_string()),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(ChatId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, destination: &ChatId, text: &str) -> Result<(), NotifyError> {
        if self.fail_on.as_deref().is_some_and(|marker| text.contains(marker)) {
            return Err(NotifyError::Status {
                status: 400,
                body: "Bad Request".into(),
            });
        }
        self.sent.lock().unwrap().push((destination.clone(), text.to_string()));
        Ok(())
    }
}
