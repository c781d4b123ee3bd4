use cascader::dataset::regions;
use cascader::{option::parse_tree, resolve, CascaderError, PathEntry, Picker, PickerProps};

#[test]
fn test_regions_parse() {
    let tree = regions().unwrap();
    assert_eq!(tree[0].label, "北京市");
    assert!(tree.iter().all(|province| !province.is_leaf()));
}

#[test]
fn test_regions_are_cached() {
    let a = regions().unwrap();
    let b = regions().unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn test_district_path_resolves() {
    let tree = regions().unwrap();
    let levels = resolve(
        &tree,
        &[
            PathEntry::new("440000", "广东省"),
            PathEntry::new("440300", "深圳市"),
            PathEntry::new("440305", "南山区"),
        ],
    )
    .unwrap();

    assert_eq!(levels.len(), 3);
    assert_eq!(levels[2].label, "南山区");
    assert_eq!(levels[2].initial_scroll_index, Some(2));
}

#[test]
fn test_two_level_region() {
    let mut picker = Picker::new(PickerProps::regions().unwrap());
    picker.set_value(vec![
        PathEntry::new("810000", "香港特别行政区"),
        PathEntry::new("810002", "湾仔区"),
    ]);
    assert_eq!(picker.levels().len(), 2);
    assert_eq!(picker.active(), 1);
}

#[test]
fn test_malformed_tree_is_dataset_error() {
    let err = parse_tree(r#"[{"value": "1"}]"#).unwrap_err();
    assert!(matches!(err, CascaderError::Dataset(_)));
}
