//! Applying an option tap to the level view model.

use crate::error::{CascaderError, Result};
use crate::option::{position_of, OptionNode, SelectionPath};
use crate::resolve::{selected_path, Level};

/// What the picker should do after a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A branch was chosen; a new page was appended and should be shown.
    Advance { page: usize },
    /// A leaf was chosen; this is the final path.
    Checked(SelectionPath),
}

/// Select `node` on level `index`.
///
/// Levels deeper than `index` are dropped. If `node` has children a fresh
/// placeholder page for them is appended, otherwise the full path is returned.
pub fn select(levels: &mut Vec<Level>, index: usize, node: &OptionNode) -> Result<Selection> {
    if index >= levels.len() {
        return Err(CascaderError::LevelOutOfRange {
            index,
            len: levels.len(),
        });
    }

    levels.truncate(index + 1);
    let level = &mut levels[index];
    level.label = node.label.clone();
    level.value = node.value.clone();
    level.children = node.children.clone();
    level.initial_scroll_index = position_of(&level.siblings, &node.value);

    match &node.children {
        Some(children) => {
            levels.push(Level::placeholder(children.clone()));
            Ok(Selection::Advance { page: index + 1 })
        }
        None => Ok(Selection::Checked(selected_path(levels))),
    }
}

/// Select the option at `option` on level `index`.
pub fn select_at(levels: &mut Vec<Level>, index: usize, option: usize) -> Result<Selection> {
    let Some(level) = levels.get(index) else {
        return Err(CascaderError::LevelOutOfRange {
            index,
            len: levels.len(),
        });
    };
    let Some(node) = level.siblings.get(option).cloned() else {
        return Err(CascaderError::OptionOutOfRange {
            level: index,
            index: option,
            len: level.siblings.len(),
        });
    };
    select(levels, index, &node)
}
