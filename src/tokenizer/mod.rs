//! Tokenizer module for token counting with different LLM models
//!
//! Holds the provider registry that resolves a model name to the single
//! provider responsible for it and wraps the provider's count into a
//! uniform [`TokenCount`].

mod error;
mod model;
pub mod provider;

// Re-exports for public API
pub use error::{TokenizerError, TokenizerResult};
pub use model::{default_model, normalize_model, Encoding, ProviderKind, DEFAULT_MODEL};
pub use provider::Provider;

use std::collections::BTreeMap;

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::debug;

/// Result of token counting operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCount {
    /// Model name as supplied by the caller
    pub model: String,
    /// Display name of the provider that counted the tokens
    pub provider: String,
    /// Number of tokens in the text
    pub token_count: usize,
    /// Whether the count is an estimate rather than exact
    pub is_estimate: bool,
}

/// Provider metadata for a single model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Display name of the provider
    pub name: String,
    /// Whether the provider produces exact counts
    pub is_exact: bool,
}

/// Ordered, read-only collection of providers.
///
/// Resolution is first-match-wins in registration order: when two providers
/// claim the same model, the one registered first always services it.
pub struct Registry {
    providers: Vec<Box<dyn Provider>>,
}

impl Registry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Build a registry from providers in registration order
    pub fn new(providers: Vec<Box<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Registered providers in resolution order
    pub fn providers(&self) -> impl Iterator<Item = &dyn Provider> + '_ {
        self.providers.iter().map(|p| p.as_ref())
    }

    fn resolve(&self, model: &str) -> Option<&dyn Provider> {
        self.providers().find(|p| p.supports_model(model))
    }

    /// Count tokens in `text` with the first provider supporting `model`.
    ///
    /// A failure from that provider is returned as is; later providers are
    /// never tried.
    pub fn count_tokens(&self, text: &str, model: &str) -> TokenizerResult<TokenCount> {
        let provider = self
            .resolve(model)
            .ok_or_else(|| TokenizerError::UnsupportedModel(model.to_string()))?;

        debug!(model, provider = provider.name(), "dispatching token count");
        let token_count = provider.count_tokens(text, model)?;

        Ok(TokenCount {
            model: model.to_string(),
            provider: provider.name().to_string(),
            token_count,
            is_estimate: !provider.is_exact(),
        })
    }

    /// All supported models grouped by provider name, each list sorted.
    ///
    /// Providers sharing a display name overwrite each other; the last
    /// registered one wins.
    pub fn list_models(&self) -> BTreeMap<String, Vec<String>> {
        let mut result = BTreeMap::new();

        for provider in self.providers() {
            let mut models = provider.models();
            models.sort();
            result.insert(provider.name().to_string(), models);
        }

        result
    }

    /// Provider that would service `model`, without counting anything
    pub fn provider_info(&self, model: &str) -> Option<ProviderInfo> {
        self.resolve(model).map(|p| ProviderInfo {
            name: p.name().to_string(),
            is_exact: p.is_exact(),
        })
    }
}

impl Default for Registry {
    /// Registry with every built-in provider
    fn default() -> Self {
        ProviderKind::iter()
            .fold(Registry::builder(), |builder, kind| {
                builder.with_boxed(kind.create())
            })
            .build()
    }
}

/// Collects providers before the registry is frozen
#[derive(Default)]
pub struct RegistryBuilder {
    providers: Vec<Box<dyn Provider>>,
}

impl RegistryBuilder {
    /// Append a provider
    pub fn with<P: Provider + 'static>(self, provider: P) -> Self {
        self.with_boxed(Box::new(provider))
    }

    /// Append an already boxed provider
    pub fn with_boxed(mut self, provider: Box<dyn Provider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Freeze the registry
    pub fn build(self) -> Registry {
        Registry::new(self.providers)
    }
}
