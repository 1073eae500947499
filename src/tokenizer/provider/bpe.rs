//! Lazily built tiktoken encoders

use once_cell::sync::OnceCell;
use tiktoken_rs::CoreBPE;
use tracing::debug;

use crate::tokenizer::error::TokenizerResult;
use crate::tokenizer::model::Encoding;

/// Per-provider set of BPE encoders, each built on first use
#[derive(Default)]
pub struct BpeEncoders {
    o200k: OnceCell<CoreBPE>,
    cl100k: OnceCell<CoreBPE>,
}

impl BpeEncoders {
    /// Create an empty encoder set
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or initialize the encoder for `encoding`
    pub fn get(&self, encoding: Encoding) -> TokenizerResult<&CoreBPE> {
        let cell = match encoding {
            Encoding::O200kBase => &self.o200k,
            Encoding::Cl100kBase => &self.cl100k,
        };

        cell.get_or_try_init(|| {
            debug!(%encoding, "building BPE encoder");
            encoding.load()
        })
    }

    /// Count tokens with `encoding`, treating special tokens as plain text
    pub fn count(&self, text: &str, encoding: Encoding) -> TokenizerResult<usize> {
        if text.is_empty() {
            return Ok(0);
        }
        Ok(self.get(encoding)?.encode_ordinary(text).len())
    }
}
