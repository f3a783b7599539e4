use crate::matcher::{MatchText, Matcher};
use crate::model::{Article, FilterSet};
use crate::source::ArticleSource;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Articles matched for one filter set, unique by id, in first-seen order.
#[derive(Debug, Default)]
pub struct RelevantSet {
    articles: Vec<Article>,
    seen: HashSet<String>,
}

impl RelevantSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Returns false if an article with the same id is already present.
    pub fn insert(&mut self, article: Article) -> bool {
        if !self.seen.insert(article.id.clone()) {
            return false;
        }
        self.articles.push(article);
        true
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }
}

/// Why an article was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason<'a> {
    Keyword(&'a str),
    Author(&'a str),
}

/// A filter set's keywords and author names, lowercased once per evaluation.
pub struct FilterTerms<'f> {
    keywords: Vec<(&'f str, MatchText)>,
    authors: Vec<(&'f str, MatchText)>,
}

impl<'f> FilterTerms<'f> {
    pub fn new(filter: &'f FilterSet) -> Self {
        let prepare = |terms: &'f [String]| -> Vec<(&'f str, MatchText)> {
            terms
                .iter()
                .map(|term| (term.as_str(), MatchText::new(term)))
                .collect()
        };
        Self {
            keywords: prepare(filter.keywords.as_slice()),
            authors: prepare(filter.authors.as_slice()),
        }
    }

    /// Keywords are tried against title and summary first, then authors.
    pub fn match_reason(&self, article: &Article, matcher: &mut Matcher) -> Option<MatchReason<'f>> {
        if !self.keywords.is_empty() {
            let title = MatchText::new(&article.title);
            let summary = MatchText::new(&article.summary);
            if let Some((keyword, _)) = self
                .keywords
                .iter()
                .find(|(_, kw)| matcher.matches(kw, &title) || matcher.matches(kw, &summary))
            {
                return Some(MatchReason::Keyword(*keyword));
            }
        }

        if self.authors.is_empty() {
            return None;
        }
        let article_authors: Vec<MatchText> =
            article.authors.iter().map(|a| MatchText::new(a)).collect();
        self.authors
            .iter()
            .find(|(_, name)| matcher.matches_any(name, &article_authors))
            .map(|(name, _)| MatchReason::Author(*name))
    }
}

pub struct RelevanceEvaluator<'a, S: ArticleSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: ArticleSource + ?Sized> RelevanceEvaluator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Collects the articles of every category of `filter` that match its
    /// keywords or authors. A category whose fetch fails contributes nothing.
    pub async fn evaluate(&self, filter: &FilterSet) -> RelevantSet {
        let mut relevant = RelevantSet::new();
        let terms = FilterTerms::new(filter);
        let mut matcher = Matcher::new();

        for category in &filter.categories {
            let articles = match self.source.fetch(category).await {
                Ok(articles) => articles,
                Err(e) => {
                    warn!("❌ [{}] Fetch failed for category '{}': {}", filter.name, category, e);
                    continue;
                }
            };
            info!("📦 [{}] {} entries in '{}'", filter.name, articles.len(), category);

            for article in articles {
                if relevant.contains(&article.id) {
                    continue;
                }
                if let Some(reason) = terms.match_reason(&article, &mut matcher) {
                    debug!("[{}] {} matched by {:?}", filter.name, article.id, reason);
                    relevant.insert(article);
                }
            }
        }

        info!("🔍 [{}] {} relevant article(s)", filter.name, relevant.len());
        relevant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChatId;
    use crate::test_utils::{article, StubSource};

    fn match_reason<'f>(article: &Article, filter: &'f FilterSet) -> Option<MatchReason<'f>> {
        FilterTerms::new(filter).match_reason(article, &mut Matcher::new())
    }

    fn filter(categories: &[&str], keywords: &[&str], authors: &[&str]) -> FilterSet {
        FilterSet {
            name: "test".into(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            authors: authors.iter().map(|s| s.to_string()).collect(),
            destination: ChatId::Id(42),
            quiet: false,
        }
    }

    fn ids(set: &RelevantSet) -> Vec<&str> {
        set.articles().iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn relevant_set_rejects_duplicate_ids() {
        let mut set = RelevantSet::new();
        assert!(set.insert(article("a", "One", "", &[])));
        assert!(!set.insert(article("a", "Other title", "", &[])));
        assert_eq!(set.len(), 1);
        assert_eq!(set.articles()[0].title, "One");
    }

    #[test]
    fn keyword_wins_over_author() {
        let f = filter(&["x"], &["entanglement"], &["Jean Dupont"]);
        let a = article("a", "Entanglement entropy", "", &["Jean Dupont"]);
        assert_eq!(match_reason(&a, &f), Some(MatchReason::Keyword("entanglement")));

        let b = article("b", "Unrelated", "", &["Jean Dupont"]);
        assert_eq!(match_reason(&b, &f), Some(MatchReason::Author("Jean Dupont")));
    }

    #[test]
    fn summary_is_searched_too() {
        let f = filter(&["x"], &["tensor network"], &[]);
        let a = article("a", "A title", "<p>We use a tensor network ansatz.</p>", &[]);
        assert!(match_reason(&a, &f).is_some());
    }

    #[tokio::test]
    async fn deduplicates_across_keywords_authors_and_categories() {
        let shared = article("a", "Spin chain entanglement", "", &["Jean Dupont"]);
        let source = StubSource::new()
            .with("quant-ph", vec![shared.clone(), article("b", "Spin liquids", "", &[])])
            .with("cond-mat", vec![shared, article("c", "Phonons", "", &["Jean Dupont"])]);
        let f = filter(
            &["quant-ph", "cond-mat"],
            &["spin chain", "entanglement", "spin"],
            &["Jean Dupont"],
        );

        let relevant = RelevanceEvaluator::new(&source).evaluate(&f).await;

        assert_eq!(ids(&relevant), vec!["a", "b", "c"]);
        assert_eq!(source.calls(), vec!["quant-ph", "cond-mat"]);
    }

    #[tokio::test]
    async fn keeps_fetch_order_regardless_of_trigger() {
        let source = StubSource::new().with(
            "cs.LG",
            vec![
                article("A", "Nothing relevant", "", &["Alice Martin"]),
                article("B", "Diffusion models", "", &[]),
                article("skip", "Compilers", "", &[]),
                article("C", "Other", "<p>score-based diffusion</p>", &[]),
            ],
        );
        let f = filter(&["cs.LG"], &["diffusion"], &["Alice Martin"]);

        let relevant = RelevanceEvaluator::new(&source).evaluate(&f).await;

        assert_eq!(ids(&relevant), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn failed_category_is_treated_as_empty() {
        let source = StubSource::new()
            .failing("broken")
            .with("cs.AI", vec![article("a", "Planning agents", "", &[])]);
        let f = filter(&["broken", "cs.AI"], &["planning"], &[]);

        let relevant = RelevanceEvaluator::new(&source).evaluate(&f).await;

        assert_eq!(ids(&relevant), vec!["a"]);
        assert_eq!(source.calls(), vec!["broken", "cs.AI"]);
    }

    #[tokio::test]
    async fn no_match_gives_empty_set() {
        let source = StubSource::new().with("cs.AI", vec![article("a", "Planning", "", &[])]);
        let f = filter(&["cs.AI"], &["photonics"], &["Nobody Known"]);

        assert!(RelevanceEvaluator::new(&source).evaluate(&f).await.is_empty());
    }
}
