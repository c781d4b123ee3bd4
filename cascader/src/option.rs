//! Option tree and selection path types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CascaderError, Result};

/// Shared, immutable list of options. Levels hold clones of the subtree they
/// display, which only bumps a reference count.
pub type OptionList = Arc<[OptionNode]>;

/// A single selectable option. `children == None` marks a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionNode {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<OptionList>,
}

impl OptionNode {
    /// Create a leaf option.
    pub fn leaf(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            children: None,
        }
    }

    /// Create an option with children.
    pub fn branch(
        value: impl Into<String>,
        label: impl Into<String>,
        children: impl Into<OptionList>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            children: Some(children.into()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Reduce to the `{value, label}` pair reported upward.
    pub fn entry(&self) -> PathEntry {
        PathEntry::new(self.value.clone(), self.label.clone())
    }
}

/// Parse an option tree from JSON.
pub fn parse_tree(json: &str) -> Result<OptionList> {
    let nodes: Vec<OptionNode> = serde_json::from_str(json).map_err(CascaderError::Dataset)?;
    Ok(nodes.into())
}

/// Find the position of the option with `value` in `options`.
pub fn position_of(options: &[OptionNode], value: &str) -> Option<usize> {
    options.iter().position(|node| node.value == value)
}

/// One selected step of a selection path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathEntry {
    pub value: String,
    pub label: String,
}

impl PathEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Root-to-leaf selection. Empty means nothing is selected.
pub type SelectionPath = Vec<PathEntry>;
