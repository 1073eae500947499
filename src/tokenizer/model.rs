//! Model naming and encoding metadata

use strum::{Display, EnumIter, EnumString};
use tiktoken_rs::CoreBPE;

use crate::tokenizer::error::{TokenizerError, TokenizerResult};
use crate::tokenizer::provider::{self, Provider};

/// Model used when the caller does not ask for one
pub const DEFAULT_MODEL: &str = "gpt-4.1";

/// Get the default model name
pub fn default_model() -> &'static str {
    DEFAULT_MODEL
}

/// Normalize a model identifier for catalog lookups
pub fn normalize_model(model: &str) -> String {
    model.to_lowercase()
}

/// Byte-pair encodings shipped with tiktoken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum Encoding {
    #[strum(serialize = "o200k_base")]
    O200kBase,
    #[strum(serialize = "cl100k_base")]
    Cl100kBase,
}

impl Encoding {
    /// Build the BPE tables for this encoding
    pub fn load(&self) -> TokenizerResult<CoreBPE> {
        let bpe = match self {
            Encoding::O200kBase => tiktoken_rs::o200k_base(),
            Encoding::Cl100kBase => tiktoken_rs::cl100k_base(),
        };

        bpe.map_err(|e| TokenizerError::Encoding {
            encoding: self.to_string(),
            message: e.to_string(),
        })
    }
}

/// Providers known to the default registry, in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum ProviderKind {
    /// OpenAI (GPT and o-series models)
    OpenAI,
    /// Google (Gemini models)
    Google,
    /// Meta (Llama models)
    Meta,
    /// Anthropic (Claude models)
    Anthropic,
}

impl ProviderKind {
    /// Construct the provider implementation for this family
    pub fn create(&self) -> Box<dyn Provider> {
        match self {
            ProviderKind::OpenAI => Box::new(provider::openai::OpenAIProvider::new()),
            ProviderKind::Google => Box::new(provider::google::GoogleProvider::new()),
            ProviderKind::Meta => Box::new(provider::meta::MetaProvider::new()),
            ProviderKind::Anthropic => Box::new(provider::anthropic::AnthropicProvider::new()),
        }
    }
}
