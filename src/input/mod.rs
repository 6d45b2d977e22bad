//! Resume ingestion: format detection, text extraction, caching

pub mod extract;
pub mod loader;
