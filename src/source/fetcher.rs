use crate::model::{Article, FetchError};
use crate::parser::{ArxivParser, Parser};
use crate::source::traits::ArticleSource;

use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub struct ArxivFetcher {
    pub client: Client,
    feed_url: String,
    parser: ArxivParser,
}

impl ArxivFetcher {
    /// `feed_url` is a template where `{category}` is replaced by the category name.
    pub fn new(client: Client, feed_url: impl Into<String>) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
            parser: ArxivParser::new(),
        }
    }

    pub fn build_client() -> Result<Client, reqwest::Error> {
        Client::builder()
            .user_agent(concat!("arxiv-sniper/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
    }

    fn build_url(&self, category: &str) -> String {
        self.feed_url.replace("{category}", category.trim())
    }
}

#[async_trait::async_trait]
impl ArticleSource for ArxivFetcher {
    async fn fetch(&self, category: &str) -> Result<Vec<Article>, FetchError> {
        let url = self.build_url(category);
        info!("📥 Fetching feed {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        self.parser.parse(&body)
    }
}
