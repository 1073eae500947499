//! Meta Llama tokenizer implementation

use super::huggingface::HuggingFaceTokenizer;
use super::{catalog_models, lookup, Catalog, Provider};
use crate::tokenizer::error::{TokenizerError, TokenizerResult};

const NAME: &str = "Meta";

/// Environment variable overriding the tokenizer repository
pub const TOKENIZER_VAR: &str = "TOKCOUNT_LLAMA_TOKENIZER";

/// Default HuggingFace repository holding the Llama 3 vocabulary
pub const DEFAULT_TOKENIZER_REPO: &str = "NousResearch/Meta-Llama-3-8B";

// Every Llama 3.x release uses the same 128k vocabulary
static MODELS: Catalog<()> = &[
    ("llama-3", ()),
    ("llama-3-8b", ()),
    ("llama-3-70b", ()),
    ("llama-3.1-8b", ()),
    ("llama-3.1-70b", ()),
    ("llama-3.1-405b", ()),
    ("llama-3.2-1b", ()),
    ("llama-3.2-3b", ()),
    ("llama-3.3-70b", ()),
];

/// Meta Llama tokenizer implementation
pub struct MetaProvider {
    tokenizer: HuggingFaceTokenizer,
}

impl MetaProvider {
    /// Create a new Llama tokenizer
    pub fn new() -> Self {
        Self::with_tokenizer(HuggingFaceTokenizer::from_env(
            TOKENIZER_VAR,
            DEFAULT_TOKENIZER_REPO,
        ))
    }

    /// Create a Llama tokenizer backed by a specific HuggingFace tokenizer
    pub fn with_tokenizer(tokenizer: HuggingFaceTokenizer) -> Self {
        Self { tokenizer }
    }
}

impl Default for MetaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for MetaProvider {
    fn name(&self) -> &str {
        NAME
    }

    fn supports_model(&self, model: &str) -> bool {
        lookup(MODELS, model).is_some()
    }

    fn count_tokens(&self, text: &str, model: &str) -> TokenizerResult<usize> {
        if !self.supports_model(model) {
            return Err(TokenizerError::ModelNotInCatalog {
                provider: NAME.to_string(),
                model: model.to_string(),
            });
        }

        self.tokenizer.count(text)
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn models(&self) -> Vec<String> {
        catalog_models(MODELS)
    }
}
