use crate::model::{Article, FetchError};
use std::sync::Arc;

/// Maps a category name to the current contents of its feed.
#[async_trait::async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch(&self, category: &str) -> Result<Vec<Article>, FetchError>;
}

#[async_trait::async_trait]
impl<T: ArticleSource + ?Sized> ArticleSource for Arc<T> {
    async fn fetch(&self, category: &str) -> Result<Vec<Article>, FetchError> {
        (**self).fetch(category).await
    }
}
