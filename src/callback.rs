//! # Callback Object
//!
//! Out-of-band requests keyed by runtime expression.

use crate::path_item::PathItem;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A map of runtime expressions to the path items describing callback requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Callback(pub IndexMap<String, PathItem>);

impl Callback {
    /// Creates an empty callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path item under the given runtime expression.
    pub fn with_path(mut self, expression: impl Into<String>, path_item: PathItem) -> Self {
        self.0.insert(expression.into(), path_item);
        self
    }
}
