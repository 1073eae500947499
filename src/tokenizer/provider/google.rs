//! Google Gemini tokenizer implementation
//!
//! Gemini 1.5 shares its SentencePiece vocabulary with Gemma, so counts are
//! produced locally from the Gemma tokenizer published on HuggingFace.

use super::huggingface::HuggingFaceTokenizer;
use super::{catalog_models, lookup, Catalog, Provider};
use crate::tokenizer::error::{TokenizerError, TokenizerResult};

const NAME: &str = "Google";

/// Environment variable overriding the tokenizer repository
pub const TOKENIZER_VAR: &str = "TOKCOUNT_GEMINI_TOKENIZER";

/// Default HuggingFace repository holding the Gemma vocabulary
pub const DEFAULT_TOKENIZER_REPO: &str = "unsloth/gemma-7b";

// Model alias to canonical Gemini model
static MODELS: Catalog<&str> = &[
    ("gemini-1.5", "gemini-1.5-flash"),
    ("gemini-1.5-flash", "gemini-1.5-flash"),
    ("gemini-1.5-pro", "gemini-1.5-pro"),
];

/// Google Gemini tokenizer implementation
pub struct GoogleProvider {
    tokenizer: HuggingFaceTokenizer,
}

impl GoogleProvider {
    /// Create a new Gemini tokenizer
    pub fn new() -> Self {
        Self::with_tokenizer(HuggingFaceTokenizer::from_env(
            TOKENIZER_VAR,
            DEFAULT_TOKENIZER_REPO,
        ))
    }

    /// Create a Gemini tokenizer backed by a specific HuggingFace tokenizer
    pub fn with_tokenizer(tokenizer: HuggingFaceTokenizer) -> Self {
        Self { tokenizer }
    }

    /// Canonical Gemini model an identifier resolves to
    pub fn canonical_model(model: &str) -> Option<&'static str> {
        lookup(MODELS, model).copied()
    }
}

impl Default for GoogleProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for GoogleProvider {
    fn name(&self) -> &str {
        NAME
    }

    fn supports_model(&self, model: &str) -> bool {
        Self::canonical_model(model).is_some()
    }

    fn count_tokens(&self, text: &str, model: &str) -> TokenizerResult<usize> {
        let canonical =
            Self::canonical_model(model).ok_or_else(|| TokenizerError::ModelNotInCatalog {
                provider: NAME.to_string(),
                model: model.to_string(),
            })?;

        tracing::trace!(model, canonical, repo = self.tokenizer.repo_id(), "counting");
        self.tokenizer.count(text)
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn models(&self) -> Vec<String> {
        catalog_models(MODELS)
    }
}
