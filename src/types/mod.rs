pub mod identifiers;

pub use identifiers::{ConversionParams, DocumentKey};
