pub mod arxiv_parser;

pub use arxiv_parser::{ArxivParser, Parser};
