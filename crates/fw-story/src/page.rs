//! Page documents.

use serde_json::{Map, Value};

use crate::block::Block;
use crate::error::StoryError;
use crate::fields;

/// A wiki page: a title and an ordered story of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDocument {
    /// Page title, empty when absent.
    pub title: String,
    /// Story blocks in document order. Non-object entries are dropped.
    pub story: Vec<Block>,
}

impl PageDocument {
    /// Parse a page from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::MalformedInput`] if the text is not a JSON object.
    pub fn parse(raw: &str) -> Result<Self, StoryError> {
        let obj: Map<String, Value> = serde_json::from_str(raw)?;
        Ok(Self::from_object(&obj))
    }

    /// Build a page from an already-parsed JSON value.
    ///
    /// Returns `None` if the value is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(Self::from_object)
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        let story = obj
            .get("story")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(Block::from_value).collect())
            .unwrap_or_default();

        Self {
            title: fields::string_or(obj, "title", ""),
            story,
        }
    }
}
