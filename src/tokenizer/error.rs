//! Error types for the tokenizer module

use thiserror::Error;

/// Result type for tokenizer operations
pub type TokenizerResult<T> = Result<T, TokenizerError>;

/// Errors that can occur during tokenization
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// No registered provider claims the model
    #[error("unsupported model: {0}. Use --list to see supported models")]
    UnsupportedModel(String),

    /// A provider was asked to count for a model outside its catalog
    #[error("unsupported {provider} model: {model}")]
    ModelNotInCatalog { provider: String, model: String },

    /// A tiktoken encoding could not be constructed
    #[error("failed to get encoding {encoding}: {message}")]
    Encoding { encoding: String, message: String },

    /// A HuggingFace tokenizer could not be loaded
    #[error("failed to load tokenizer {repo}: {message}")]
    TokenizerLoad { repo: String, message: String },

    /// Error from tokenizer library while encoding text
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Failed to acquire lock on a shared tokenizer
    #[error("Failed to acquire lock on tokenizer")]
    TokenizerLockError,
}

impl TokenizerError {
    /// Whether the error came from the provider that serviced the request,
    /// as opposed to no provider claiming the model at all.
    pub fn is_provider_failure(&self) -> bool {
        !matches!(self, TokenizerError::UnsupportedModel(_))
    }
}
