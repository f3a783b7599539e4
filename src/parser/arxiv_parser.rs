// arXiv RSS/Atom parsing
use crate::model::{Article, FetchError};
use feed_rs::model::Entry;
use feed_rs::parser;
use tracing::debug;

pub trait Parser {
    fn parse(&self, body: &[u8]) -> Result<Vec<Article>, FetchError>;
}

pub struct ArxivParser;

impl ArxivParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ArxivParser {
    fn parse(&self, body: &[u8]) -> Result<Vec<Article>, FetchError> {
        let feed = parser::parse(body).map_err(|e| FetchError::Parse(e.to_string()))?;

        let articles: Vec<Article> = feed.entries.into_iter().filter_map(to_article).collect();
        debug!("Parsed {} articles from feed", articles.len());
        Ok(articles)
    }
}

fn to_article(entry: Entry) -> Option<Article> {
    // Prefer the abstract page URL; arXiv guids are `oai:` identifiers.
    let id = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .filter(|href| !href.is_empty())
        .or_else(|| Some(entry.id.clone()).filter(|id| !id.is_empty()))?;

    let title = entry.title.map(|t| t.content).unwrap_or_default();
    let summary = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .unwrap_or_default();

    // dc:creator holds every author in one comma-separated string.
    let authors = entry
        .authors
        .iter()
        .flat_map(|person| person.name.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    Some(Article {
        id,
        title: title.trim().to_string(),
        summary,
        authors,
    })
}
