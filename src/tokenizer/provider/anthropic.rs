//! Anthropic Claude token estimation
//!
//! Claude's tokenizer is not published, so counts are approximated from the
//! `cl100k_base` encoding and scaled up slightly. Claude tends to produce
//! more tokens than cl100k for the same English text.

use super::bpe::BpeEncoders;
use super::{catalog_models, lookup, Catalog, Provider};
use crate::tokenizer::error::{TokenizerError, TokenizerResult};
use crate::tokenizer::model::Encoding;

const NAME: &str = "Anthropic";

/// Correction applied to the cl100k count, in tenths
const CORRECTION_TENTHS: usize = 11;

static MODELS: Catalog<()> = &[
    ("claude-3-haiku", ()),
    ("claude-3-opus", ()),
    ("claude-3-5-haiku", ()),
    ("claude-3-5-sonnet", ()),
    ("claude-3-7-sonnet", ()),
    ("claude-sonnet-4", ()),
    ("claude-opus-4", ()),
];

/// Claude token estimator
#[derive(Default)]
pub struct AnthropicProvider {
    encoders: BpeEncoders,
}

impl AnthropicProvider {
    /// Create a new Claude estimator
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale a cl100k count to a Claude estimate, rounding up
    fn scale(count: usize) -> usize {
        (count * CORRECTION_TENTHS).div_ceil(10)
    }
}

impl Provider for AnthropicProvider {
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

        let base = self.encoders.count(text, Encoding::Cl100kBase)?;
        Ok(Self::scale(base))
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn models(&self) -> Vec<String> {
        catalog_models(MODELS)
    }
}
