use cascader::{GeometryCache, TabGeometry, Underline};

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

/// Tabs at x = 2, 12, 24 with widths 6, 8, 4.
fn measured() -> Underline {
    let mut underline = Underline::new();
    underline.sync_page_count(3);
    underline.on_tab_layout(0, TabGeometry::new(2.0, 6.0), 1);
    underline.on_tab_layout(1, TabGeometry::new(12.0, 8.0), 1);
    underline.on_tab_layout(2, TabGeometry::new(24.0, 4.0), 1);
    underline
}

// =============================================================================
// Tab layout
// =============================================================================

#[test]
fn test_active_tab_layout_snaps() {
    let underline = measured();
    assert_eq!(underline.current(), TabGeometry::new(12.0, 8.0));
}

#[test]
fn test_inactive_tab_layout_does_not_move() {
    let mut underline = Underline::new();
    underline.on_tab_layout(1, TabGeometry::new(12.0, 8.0), 0);
    assert_eq!(underline.current(), TabGeometry::default());
    assert!(!underline.take_changed());
}

#[test]
fn test_page_count_change_clears_geometry() {
    let mut cache = GeometryCache::new();
    cache.sync_page_count(2);
    cache.insert(0, TabGeometry::new(1.0, 1.0));
    cache.insert(1, TabGeometry::new(3.0, 1.0));

    cache.sync_page_count(2);
    assert_eq!(cache.len(), 2);

    cache.sync_page_count(3);
    assert!(cache.is_empty());
    assert_eq!(cache.get(0), None);
}

// =============================================================================
// Scroll interpolation
// =============================================================================

#[test]
fn test_zero_fraction_matches_active_tab() {
    let mut underline = measured();
    underline.on_scroll(30.0, 40.0, 1);
    underline.on_scroll(40.0, 40.0, 1);
    assert_eq!(underline.current(), TabGeometry::new(12.0, 8.0));
}

#[test]
fn test_forward_fraction_is_linear() {
    let mut underline = measured();

    underline.on_scroll(50.0, 40.0, 1); // f = 0.25
    let quarter = underline.current();
    assert!(approx(quarter.x, 12.0 + 0.25 * 12.0));
    assert!(approx(quarter.width, 8.0 + 0.25 * -4.0));

    underline.on_scroll(60.0, 40.0, 1); // f = 0.5
    let half = underline.current();
    assert!(approx(half.x, 18.0));
    assert!(approx(half.width, 6.0));

    // Strictly between the two tabs.
    for g in [quarter, half] {
        assert!(g.x > 12.0 && g.x < 24.0);
        assert!(g.width < 8.0 && g.width > 4.0);
    }
}

#[test]
fn test_backward_fraction_moves_toward_previous() {
    let mut underline = measured();
    underline.on_scroll(30.0, 40.0, 1); // f = -0.25
    let g = underline.current();
    assert!(approx(g.x, 12.0 - 0.25 * 10.0));
    assert!(approx(g.width, 8.0 - 0.25 * 2.0));
}

#[test]
fn test_fraction_is_clamped_to_one_page() {
    let mut underline = measured();
    underline.on_scroll(200.0, 40.0, 1);
    assert_eq!(underline.current(), TabGeometry::new(24.0, 4.0));
}

#[test]
fn test_missing_neighbour_is_noop() {
    let mut underline = Underline::new();
    underline.sync_page_count(2);
    underline.on_tab_layout(0, TabGeometry::new(2.0, 6.0), 0);
    underline.take_changed();

    underline.on_scroll(20.0, 40.0, 0);
    assert_eq!(underline.current(), TabGeometry::new(2.0, 6.0));
    assert!(!underline.take_changed());

    // No previous tab before page 0 either.
    underline.on_scroll(-10.0, 40.0, 0);
    assert_eq!(underline.current(), TabGeometry::new(2.0, 6.0));
}

#[test]
fn test_missing_active_geometry_is_noop() {
    let mut underline = Underline::new();
    underline.on_tab_layout(1, TabGeometry::new(12.0, 8.0), 0);
    underline.on_scroll(20.0, 40.0, 0);
    assert_eq!(underline.current(), TabGeometry::default());
}

#[test]
fn test_zero_page_width_is_noop() {
    let mut underline = measured();
    underline.take_changed();
    underline.on_scroll(10.0, 0.0, 1);
    assert!(!underline.take_changed());
}

#[test]
fn test_snap_without_geometry_is_noop() {
    let mut underline = measured();
    underline.snap(7);
    assert_eq!(underline.current(), TabGeometry::new(12.0, 8.0));
    underline.snap(0);
    assert_eq!(underline.current(), TabGeometry::new(2.0, 6.0));
}
