use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::utils::date::{now_iso, parse_iso};
use crate::utils::mime::guess_type;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Invalid metadata JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Invalid ISO-8601 timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Provenance and timestamps of a converted document.
///
/// Optional fields are omitted from the serialized form when unset, never
/// written as `null`. Consumers branch on key presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl DocumentMetadata {
    /// Record with only `created_at` set. The value is not validated.
    pub fn new(created_at: impl Into<String>) -> Self {
        Self {
            created_at: created_at.into(),
            updated_at: None,
            source: None,
            content_type: None,
        }
    }

    pub fn stamped_now() -> Self {
        Self::new(now_iso())
    }

    /// Record for a freshly converted source: stamped now, with the content
    /// type guessed from the source's name when possible.
    pub fn for_source(source: impl Into<String>) -> Self {
        let source = source.into();
        let content_type = guess_type(&source);

        Self {
            created_at: now_iso(),
            updated_at: None,
            source: Some(source),
            content_type,
        }
    }

    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Copy of this record with `updated_at` set to the current time.
    pub fn touched(&self) -> Self {
        self.clone().with_updated_at(now_iso())
    }

    /// Plain key-value form containing only the fields that are present,
    /// in declaration order.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("created_at".into(), Value::String(self.created_at.clone()));

        let optional = [
            ("updated_at", &self.updated_at),
            ("source", &self.source),
            ("type", &self.content_type),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                map.insert(key.into(), Value::String(value.clone()));
            }
        }

        map
    }

    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn created_at_instant(&self) -> Result<DateTime<FixedOffset>, MetadataError> {
        parse_iso(&self.created_at)
    }
}
