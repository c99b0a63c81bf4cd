//! Metadata records and small helpers for document conversion services.
//!
//! `docmeta-core` defines the per-document [`DocumentMetadata`] record, the
//! accessor that reads it back out of an application-owned store, and the
//! stateless helpers used around it: ISO-8601 timestamps, content-type
//! guessing, host platform detection and vision-language model selection.
//!
//! [`DocumentMetadata`]: metadata::DocumentMetadata

pub mod metadata;
pub mod types;
pub mod utils;
pub mod vlm;

pub use metadata::{get_metadata, DocumentMetadata, LocalMetadataStore, MetadataError, MetadataStore};
pub use types::identifiers::{ConversionParams, DocumentKey};
pub use utils::{guess_type, is_target_platform, now_iso, Platform};
pub use vlm::{select_model_config, VlmModelSpec};
