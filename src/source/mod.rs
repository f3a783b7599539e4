pub mod fetcher;
pub mod traits;

pub use fetcher::ArxivFetcher;
pub use traits::ArticleSource;
