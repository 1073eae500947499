/*!
 * tokcount - Count the tokens a text consumes for different LLM providers
 *
 * A registry of tokenizer providers resolves a model name to the provider
 * responsible for it and reports whether the resulting count is exact.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod tokenizer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{Result, TokCountError};
pub use report::{Catalog, CatalogEntry, ReportFormat, Reporter};
pub use tokenizer::{
    default_model, Provider, ProviderInfo, Registry, TokenCount, TokenizerError, DEFAULT_MODEL,
};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
