//! Parsing of existing URLs and projection of their components for display.

mod extractor;
mod parser;


pub use extractor::{Component, ComponentExtractor, Components, ExtractOptions};
pub use parser::ParsedUrl;
