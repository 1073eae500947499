//! Provider implementations for different tokenizer backends

pub mod anthropic;
pub mod bpe;
pub mod google;
pub mod huggingface;
pub mod meta;
pub mod openai;

use crate::tokenizer::error::TokenizerResult;
use crate::tokenizer::model::normalize_model;

/// Capability every tokenizer provider must satisfy
pub trait Provider: Send + Sync {
    /// Display name used for labelling results and grouping listings
    fn name(&self) -> &str;

    /// Case-insensitive membership test against the provider's catalog
    fn supports_model(&self, model: &str) -> bool;

    /// Count tokens in `text` as `model` would see them
    fn count_tokens(&self, text: &str, model: &str) -> TokenizerResult<usize>;

    /// Whether counts are exact rather than estimated
    fn is_exact(&self) -> bool;

    /// All model identifiers this provider recognizes, in no particular order
    fn models(&self) -> Vec<String>;
}

/// Static model catalog mapping lower-case identifiers to provider data
pub(crate) type Catalog<T> = &'static [(&'static str, T)];

/// Find the catalog entry for `model`, ignoring case
pub(crate) fn lookup<T: 'static>(catalog: Catalog<T>, model: &str) -> Option<&'static T> {
    let model = normalize_model(model);
    catalog
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, value)| value)
}

/// Model identifiers of a catalog
pub(crate) fn catalog_models<T: 'static>(catalog: Catalog<T>) -> Vec<String> {
    catalog.iter().map(|(name, _)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: Catalog<u8> = &[("alpha-1", 1), ("beta-2", 2)];

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(lookup(CATALOG, "alpha-1"), Some(&1));
        assert_eq!(lookup(CATALOG, "BETA-2"), Some(&2));
        assert_eq!(lookup(CATALOG, "gamma"), None);
        assert_eq!(lookup(CATALOG, ""), None);
    }

    #[test]
    fn test_catalog_models() {
        assert_eq!(catalog_models(CATALOG), vec!["alpha-1", "beta-2"]);
    }
}
