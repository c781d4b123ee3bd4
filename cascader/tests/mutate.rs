use std::sync::Arc;

use cascader::mutate::{select, select_at, Selection};
use cascader::{resolve, CascaderError, OptionList, OptionNode, PathEntry};

fn china() -> OptionList {
    Arc::from(vec![OptionNode::branch(
        "CN",
        "China",
        vec![
            OptionNode::leaf("BJ", "Beijing"),
            OptionNode::branch("SH", "Shanghai", vec![OptionNode::leaf("PD", "Pudong")]),
        ],
    )])
}

// =============================================================================
// Leaf selection
// =============================================================================

#[test]
fn test_leaf_at_root_reports_path() {
    let tree: OptionList = china()[0].children.clone().unwrap();
    let mut levels = resolve(&tree, &[]).unwrap();

    let selection = select_at(&mut levels, 0, 0).unwrap();

    assert_eq!(
        selection,
        Selection::Checked(vec![PathEntry::new("BJ", "Beijing")])
    );
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].value, "BJ");
    assert_eq!(levels[0].initial_scroll_index, Some(0));
}

#[test]
fn test_leaf_at_depth_reports_full_path() {
    let tree = china();
    let mut levels = resolve(&tree, &[PathEntry::new("CN", "China")]).unwrap();

    let selection = select_at(&mut levels, 1, 0).unwrap();

    assert_eq!(
        selection,
        Selection::Checked(vec![
            PathEntry::new("CN", "China"),
            PathEntry::new("BJ", "Beijing"),
        ])
    );
    assert_eq!(levels.len(), 2);
}

// =============================================================================
// Branch selection
// =============================================================================

#[test]
fn test_branch_appends_one_placeholder_and_advances() {
    let tree = china();
    let mut levels = resolve(&tree, &[]).unwrap();

    let selection = select_at(&mut levels, 0, 0).unwrap();

    assert_eq!(selection, Selection::Advance { page: 1 });
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].value, "CN");
    assert_eq!(Some(&levels[1].siblings), tree[0].children.as_ref());
    assert_eq!(levels[1].label, "");
    assert_eq!(levels[1].value, "");
}

#[test]
fn test_reselect_truncates_deeper_levels() {
    let tree = china();
    let mut levels = resolve(
        &tree,
        &[PathEntry::new("CN", "China"), PathEntry::new("SH", "Shanghai")],
    )
    .unwrap();
    assert_eq!(levels.len(), 3);
    let siblings_before = levels[1].siblings.clone();

    // Pick Beijing instead of Shanghai on level 1.
    let selection = select_at(&mut levels, 1, 0).unwrap();

    assert!(matches!(selection, Selection::Checked(_)));
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[1].value, "BJ");
    assert_eq!(levels[1].siblings, siblings_before);
}

#[test]
fn test_reselect_branch_on_earlier_level() {
    let tree = china();
    let mut levels = resolve(
        &tree,
        &[PathEntry::new("CN", "China"), PathEntry::new("SH", "Shanghai")],
    )
    .unwrap();

    let node = tree[0].clone();
    let selection = select(&mut levels, 0, &node).unwrap();

    assert_eq!(selection, Selection::Advance { page: 1 });
    assert_eq!(levels.len(), 2);
    assert!(!levels[1].is_selected());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_level_out_of_range() {
    let tree = china();
    let mut levels = resolve(&tree, &[]).unwrap();

    let err = select(&mut levels, 3, &tree[0]).unwrap_err();
    assert!(matches!(err, CascaderError::LevelOutOfRange { index: 3, len: 1 }));
    assert_eq!(levels.len(), 1);
}

#[test]
fn test_option_out_of_range() {
    let tree = china();
    let mut levels = resolve(&tree, &[]).unwrap();

    let err = select_at(&mut levels, 0, 5).unwrap_err();
    assert!(matches!(
        err,
        CascaderError::OptionOutOfRange {
            level: 0,
            index: 5,
            len: 1
        }
    ));
}
