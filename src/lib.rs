pub mod cli;
pub mod codec;
pub mod uri_builder;
pub mod url_parser;
pub mod utils;
