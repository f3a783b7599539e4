use crate::analyzer::{RelevanceEvaluator, RelevantSet};
use crate::config::{load_config, AppConfig, ConfigError};
use crate::model::{ChatId, FilterSet};
use crate::notifier::message::{article_message, found_summary, NOTHING_FOUND};
use crate::notifier::Notifier;
use crate::source::ArticleSource;
use std::path::Path;
use tracing::{info, warn};

/// Totals for one run, logged by `main`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub filter_sets: usize,
    pub articles_found: usize,
    pub messages_sent: usize,
    pub messages_failed: usize,
}

pub struct Orchestrator<S, N> {
    source: S,
    notifier: N,
    /// Process-wide quiet flag, OR-ed with each filter set's own flag.
    quiet: bool,
}

impl<S: ArticleSource, N: Notifier> Orchestrator<S, N> {
    pub fn new(source: S, notifier: N, quiet: bool) -> Self {
        Self {
            source,
            notifier,
            quiet,
        }
    }

    /// Evaluates and notifies every filter set in order, one at a time.
    pub async fn run(&self, filters: &[FilterSet]) -> RunReport {
        let mut report = RunReport::default();
        let evaluator = RelevanceEvaluator::new(&self.source);

        for filter in filters {
            info!(
                "Processing filter set '{}' ({} categories)",
                filter.name,
                filter.categories.len()
            );
            let relevant = evaluator.evaluate(filter).await;
            report.filter_sets += 1;
            report.articles_found += relevant.len();
            self.notify(filter, &relevant, &mut report).await;
        }

        report
    }

    async fn notify(&self, filter: &FilterSet, relevant: &RelevantSet, report: &mut RunReport) {
        if relevant.is_empty() {
            if self.quiet || filter.quiet {
                info!("[{}] Nothing found, staying quiet", filter.name);
            } else {
                self.deliver(&filter.destination, NOTHING_FOUND, report).await;
            }
            return;
        }

        self.deliver(&filter.destination, &found_summary(relevant.len()), report)
            .await;
        for article in relevant.articles() {
            self.deliver(&filter.destination, &article_message(article), report)
                .await;
        }
    }

    async fn deliver(&self, destination: &ChatId, text: &str, report: &mut RunReport) {
        match self.notifier.send(destination, text).await {
            Ok(()) => report.messages_sent += 1,
            Err(e) => {
                warn!("❌ Notification to {} failed: {}", destination, e);
                report.messages_failed += 1;
            }
        }
    }
}

/// Loads the configuration and, only if it is valid, builds the collaborators
/// and runs every filter set.
pub async fn launch<S, N, F>(
    config_path: impl AsRef<Path>,
    quiet: bool,
    build: F,
) -> Result<RunReport, ConfigError>
where
    S: ArticleSource,
    N: Notifier,
    F: FnOnce(&AppConfig) -> (S, N),
{
    let config = load_config(config_path)?;
    info!("Loaded {} filter set(s)", config.filters.len());

    let (source, notifier) = build(&config);
    let orchestrator = Orchestrator::new(source, notifier, quiet);
    Ok(orchestrator.run(&config.filters).await)
}
