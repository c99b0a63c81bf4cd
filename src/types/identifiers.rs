use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opaque identifier of a document within a metadata store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentKey(String);

/// Conversion options that change the converted output, and therefore the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionParams {
    pub enable_ocr: bool,
    pub ocr_languages: Vec<String>,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            enable_ocr: false,
            ocr_languages: vec!["en".into()],
        }
    }
}

impl DocumentKey {
    /// Wrap a caller-chosen identifier as-is.
    pub fn new(raw: impl Into<String>) -> Self {
        DocumentKey(raw.into())
    }

    /// Stable key for `source` converted with `params`: hex SHA-256 over
    /// `source \0 ocr-flag (\0 language)*`. Same inputs, same key.
    pub fn derive(source: &str, params: &ConversionParams) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(source.as_bytes());
        hasher.update([0u8]);
        hasher.update(if params.enable_ocr { b"ocr" } else { b"raw" });
        for language in &params.ocr_languages {
            hasher.update([0u8]);
            hasher.update(language.as_bytes());
        }

        DocumentKey(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocumentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DocumentKey> for String {
    fn from(key: DocumentKey) -> Self {
        key.0
    }
}
