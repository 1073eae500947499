//! OpenAI tokenizer implementation using tiktoken

use super::bpe::BpeEncoders;
use super::{catalog_models, lookup, Catalog, Provider};
use crate::tokenizer::error::{TokenizerError, TokenizerResult};
use crate::tokenizer::model::Encoding;

const NAME: &str = "OpenAI";

static MODELS: Catalog<Encoding> = &[
    // GPT-4o and GPT-4.1 families
    ("gpt-4o", Encoding::O200kBase),
    ("gpt-4o-mini", Encoding::O200kBase),
    ("gpt-4.1", Encoding::O200kBase),
    ("gpt-4.1-mini", Encoding::O200kBase),
    ("gpt-4.1-nano", Encoding::O200kBase),
    // Reasoning models
    ("o1", Encoding::O200kBase),
    ("o1-mini", Encoding::O200kBase),
    ("o1-pro", Encoding::O200kBase),
    ("o3", Encoding::O200kBase),
    ("o3-mini", Encoding::O200kBase),
    ("o4-mini", Encoding::O200kBase),
    // GPT-4 and GPT-3.5
    ("gpt-4", Encoding::Cl100kBase),
    ("gpt-4-turbo", Encoding::Cl100kBase),
    ("gpt-3.5-turbo", Encoding::Cl100kBase),
];

/// OpenAI tokenizer implementation
#[derive(Default)]
pub struct OpenAIProvider {
    encoders: BpeEncoders,
}

impl OpenAIProvider {
    /// Create a new OpenAI tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoding used by `model`, if it is an OpenAI model
    pub fn encoding_for(model: &str) -> Option<Encoding> {
        lookup(MODELS, model).copied()
    }
}

impl Provider for OpenAIProvider {
    fn name(&self) -> &str {
        NAME
    }

    fn supports_model(&self, model: &str) -> bool {
        Self::encoding_for(model).is_some()
    }

    fn count_tokens(&self, text: &str, model: &str) -> TokenizerResult<usize> {
        let encoding =
            Self::encoding_for(model).ok_or_else(|| TokenizerError::ModelNotInCatalog {
                provider: NAME.to_string(),
                model: model.to_string(),
            })?;

        self.encoders.count(text, encoding)
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn models(&self) -> Vec<String> {
        catalog_models(MODELS)
    }
}
