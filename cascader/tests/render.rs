use std::sync::Arc;
use std::time::{Duration, Instant};

use cascader::{
    Buffer, Easing, OptionList, OptionNode, PathEntry, Picker, PickerConfig, PickerProps, Rect,
};

fn cities() -> OptionList {
    Arc::from(vec![
        OptionNode::leaf("BJ", "Beijing"),
        OptionNode::branch("SH", "Shanghai", vec![OptionNode::leaf("PD", "Pudong")]),
    ])
}

fn draw(picker: &mut Picker) -> Buffer {
    let mut buf = Buffer::new(40, 6);
    picker.layout(Rect::from_size(40, 6));
    picker.render(&mut buf);
    buf
}

fn shanghai() -> Picker {
    let config = PickerConfig {
        easing: Easing::Linear,
        page_scroll_ms: 100,
        ..PickerConfig::default()
    };
    Picker::new(
        PickerProps::new(cities())
            .value(vec![PathEntry::new("SH", "Shanghai")])
            .config(config),
    )
}

// =============================================================================
// Tabs and underline
// =============================================================================

#[test]
fn test_tab_labels_use_placeholder() {
    let mut picker = shanghai();
    let buf = draw(&mut picker);

    assert!(buf.row_text(0).starts_with("  Shanghai    请选择"));
    let active = picker.config().active_color;
    assert_eq!(buf.get(2, 0).unwrap().fg, active);
    assert!(buf.get(2, 0).unwrap().style.bold);
    assert_ne!(buf.get(14, 0).unwrap().fg, active);
    assert!(buf.get(14, 0).unwrap().style.dim);
}

#[test]
fn test_underline_under_active_tab() {
    let mut picker = shanghai();
    let buf = draw(&mut picker);

    for x in 2..10 {
        assert_eq!(buf.get(x, 1).unwrap().char, '━', "column {}", x);
    }
    assert_eq!(buf.get(1, 1).unwrap().char, '─');
    assert_eq!(buf.get(10, 1).unwrap().char, '─');
    assert_eq!(buf.get(39, 1).unwrap().char, '─');
}

// =============================================================================
// Pages
// =============================================================================

#[test]
fn test_checked_option_and_cursor() {
    let mut picker = shanghai();
    let buf = draw(&mut picker);

    assert!(buf.row_text(2).starts_with(" Beijing"));
    assert!(buf.row_text(3).starts_with("›Shanghai    √"));
    assert_eq!(buf.get(1, 3).unwrap().fg, picker.config().active_color);
    assert_ne!(buf.get(1, 2).unwrap().fg, picker.config().active_color);
    assert!(buf.row_text(4).trim().is_empty());
}

#[test]
fn test_pages_slide_while_scrolling() {
    let mut picker = shanghai();
    picker.layout(Rect::from_size(40, 6));
    let t0 = Instant::now();

    picker.select_tab(1, t0);
    picker.tick(t0 + Duration::from_millis(50));
    assert_eq!(picker.scroll_offset(), 20.0);

    let buf = draw(&mut picker);
    // Page 1 starts halfway across; its cursor follows the scroll target.
    assert_eq!(buf.get(20, 2).unwrap().char, '›');
    assert_eq!(buf.get(21, 2).unwrap().char, 'P');
    assert!(buf.row_text(2)[..20].trim().is_empty());
}

#[test]
fn test_empty_area_draws_nothing() {
    let mut picker = shanghai();
    let mut buf = Buffer::new(40, 6);
    picker.layout(Rect::from_size(40, 0));
    picker.render(&mut buf);
    assert!(buf.row_text(0).trim().is_empty());
}

#[test]
fn test_huge_tab_margin_draws_empty_tab_row() {
    let config = PickerConfig {
        tab_margin: 40000,
        ..PickerConfig::default()
    };
    let mut picker = Picker::new(PickerProps::new(cities()).config(config));
    let buf = draw(&mut picker);

    assert!(buf.row_text(0).trim().is_empty());
    assert!(buf.row_text(2).starts_with("›Beijing"));
}
