//! Insertion-ordered request parameters
//!
//! The exchange recomputes the content digest over the exact body bytes it
//! receives, so the serialized form that is hashed must be the form that is
//! sent. Key order is preserved as inserted (`serde_json`'s `preserve_order`
//! feature) and is never normalized. Optional values are omitted entirely
//! rather than serialized as `null`.

use serde_json::{Map, Value};

use crate::error::{RestError, RestResult};

/// Parameter mapping for one request, serialized in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams(Map<String, Value>);

impl RequestParams {
    /// Create an empty parameter mapping
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a parameter, keeping insertion order
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style insert that omits `None`
    pub fn with_opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no parameters were inserted
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical serialization: the exact bytes that are hashed for the
    /// content digest and sent as the request body.
    pub fn to_json(&self) -> RestResult<String> {
        serde_json::to_string(&self.0).map_err(|e| RestError::InvalidParameter(e.to_string()))
    }
}
