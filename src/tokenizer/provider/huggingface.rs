//! HuggingFace tokenizer loading shared by SentencePiece-based providers

use std::env;
use std::sync::Mutex;

use once_cell::sync::OnceCell;
use tokenizers::{FromPretrainedParameters, Tokenizer as HfTokenizer};
use tracing::{debug, warn};

use crate::tokenizer::error::{TokenizerError, TokenizerResult};

/// Environment variable holding a HuggingFace access token for gated repos
pub const HF_TOKEN_VAR: &str = "HF_TOKEN";

/// Lazily downloaded HuggingFace tokenizer
pub struct HuggingFaceTokenizer {
    repo_id: String,
    tokenizer: OnceCell<Mutex<HfTokenizer>>,
}

impl HuggingFaceTokenizer {
    /// Create a tokenizer for `repo_id`, unless `override_var` names another repo
    pub fn from_env(override_var: &str, default_repo: &str) -> Self {
        let repo_id = env::var(override_var)
            .ok()
            .filter(|repo| !repo.trim().is_empty())
            .unwrap_or_else(|| default_repo.to_string());

        Self::new(repo_id)
    }

    /// Create a tokenizer backed by `repo_id`
    pub fn new(repo_id: impl Into<String>) -> Self {
        Self {
            repo_id: repo_id.into(),
            tokenizer: OnceCell::new(),
        }
    }

    /// Repository the tokenizer is loaded from
    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    /// Get or initialize the tokenizer
    fn get_tokenizer(&self) -> TokenizerResult<&Mutex<HfTokenizer>> {
        self.tokenizer.get_or_try_init(|| {
            debug!(repo = %self.repo_id, "loading HuggingFace tokenizer");

            let params = FromPretrainedParameters {
                token: env::var(HF_TOKEN_VAR).ok(),
                ..Default::default()
            };

            let tokenizer = HfTokenizer::from_pretrained(&self.repo_id, Some(params))
                .map_err(|e| {
                    warn!(repo = %self.repo_id, error = %e, "tokenizer download failed");
                    TokenizerError::TokenizerLoad {
                        repo: self.repo_id.clone(),
                        message: e.to_string(),
                    }
                })?;

            Ok(Mutex::new(tokenizer))
        })
    }

    /// Count tokens in `text` without adding special tokens
    pub fn count(&self, text: &str) -> TokenizerResult<usize> {
        if text.is_empty() {
            return Ok(0);
        }

        let tokenizer_mutex = self.get_tokenizer()?;

        let tokenizer = tokenizer_mutex
            .lock()
            .map_err(|_| TokenizerError::TokenizerLockError)?;

        let encoding = tokenizer
            .encode(text, false)
            .map_err(|e| TokenizerError::Tokenizer(format!("Failed to encode text: {}", e)))?;

        Ok(encoding.get_ids().len())
    }
}
