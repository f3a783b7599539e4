// Analyzer module: decides which fetched articles are relevant to a filter set.

pub mod relevance;

pub use relevance::{RelevanceEvaluator, RelevantSet};
