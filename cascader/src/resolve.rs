//! Selection-path resolution.
//!
//! Turns an externally supplied [`SelectionPath`] into the per-page view
//! model the picker renders: one [`Level`] per selected step, plus a trailing
//! placeholder page when the deepest selected option still has children.

use crate::error::{CascaderError, Result};
use crate::option::{position_of, OptionList, PathEntry, SelectionPath};

/// View model for one page of the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Label of the selected option, empty when nothing is selected yet.
    pub label: String,
    /// Value of the selected option, empty when nothing is selected yet.
    pub value: String,
    /// Options selectable on this page.
    pub siblings: OptionList,
    /// Position of the selected option in `siblings`.
    pub initial_scroll_index: Option<usize>,
    /// Children of the selected option.
    pub children: Option<OptionList>,
}

impl Level {
    /// An unselected page offering `siblings`.
    pub fn placeholder(siblings: OptionList) -> Self {
        Self {
            label: String::new(),
            value: String::new(),
            siblings,
            initial_scroll_index: None,
            children: None,
        }
    }

    pub fn is_selected(&self) -> bool {
        !self.value.is_empty()
    }

    /// The selected option's `{value, label}` pair.
    pub fn entry(&self) -> PathEntry {
        PathEntry::new(self.value.clone(), self.label.clone())
    }

    /// Select the sibling at `index`. Returns false if out of range.
    pub(crate) fn select_sibling(&mut self, index: usize) -> bool {
        let Some(node) = self.siblings.get(index) else {
            return false;
        };
        self.label = node.label.clone();
        self.value = node.value.clone();
        self.children = node.children.clone();
        self.initial_scroll_index = Some(index);
        true
    }
}

/// A value token that could not be found among its level's siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMismatch {
    pub depth: usize,
    pub value: String,
}

impl From<PathMismatch> for CascaderError {
    fn from(m: PathMismatch) -> Self {
        CascaderError::PathMismatch {
            depth: m.depth,
            value: m.value,
        }
    }
}

/// Result of a lenient resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub levels: Vec<Level>,
    /// Set when descent stopped early on an unknown token.
    pub mismatch: Option<PathMismatch>,
}

/// Resolve `path` against `tree`, failing on the first unknown token.
pub fn resolve(tree: &OptionList, path: &[PathEntry]) -> Result<Vec<Level>> {
    let resolved = resolve_prefix(tree, path);
    match resolved.mismatch {
        Some(mismatch) => Err(mismatch.into()),
        None => Ok(resolved.levels),
    }
}

/// Resolve as much of `path` as matches `tree`.
///
/// Descent stops at the first unknown token. The page at that depth is kept
/// as an unselected placeholder when it has options to offer, so the result
/// still satisfies the level-count invariant for the resolved prefix.
pub fn resolve_prefix(tree: &OptionList, path: &[PathEntry]) -> Resolved {
    let mut levels = vec![Level::placeholder(tree.clone())];
    let mut mismatch = None;

    for (depth, entry) in path.iter().enumerate() {
        // Invariant: levels.len() == depth + 1 when there is a page to fill.
        let Some(level) = levels.get_mut(depth) else {
            mismatch = Some(PathMismatch {
                depth,
                value: entry.value.clone(),
            });
            break;
        };

        let Some(index) = position_of(&level.siblings, &entry.value) else {
            mismatch = Some(PathMismatch {
                depth,
                value: entry.value.clone(),
            });
            break;
        };

        level.select_sibling(index);
        if let Some(children) = level.children.clone() {
            levels.push(Level::placeholder(children));
        }
    }

    if let Some(m) = &mismatch {
        log::debug!(
            "resolve stopped at depth {} on {:?}, kept {} levels",
            m.depth,
            m.value,
            levels.len()
        );
    }

    Resolved { levels, mismatch }
}

/// Reduce the selected levels to the path reported upward.
pub fn selected_path(levels: &[Level]) -> SelectionPath {
    levels
        .iter()
        .filter(|level| level.is_selected())
        .map(Level::entry)
        .collect()
}
