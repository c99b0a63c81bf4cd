pub mod record;
pub mod store;

pub use record::{DocumentMetadata, MetadataError};
pub use store::{get_metadata, LocalMetadataStore, MetadataStore};
