use std::time::{Duration, Instant};

use cascader::{Easing, PagedScroller, ScrollUpdate, TransitionConfig};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Two pages of 40 columns, 100ms linear scrolls, 8ms throttle.
fn scroller() -> PagedScroller {
    let mut s = PagedScroller::new(TransitionConfig::new(ms(100), Easing::Linear), ms(8));
    s.set_geometry(40.0, 2);
    s
}

// =============================================================================
// Easing
// =============================================================================

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_zero_duration_completes_immediately() {
    let config = TransitionConfig::new(Duration::ZERO, Easing::EaseIn);
    assert_eq!(config.progress(Duration::ZERO), 1.0);
}

// =============================================================================
// Programmatic scrolls
// =============================================================================

#[test]
fn test_scroll_settles_on_target() {
    let mut s = scroller();
    let t0 = Instant::now();

    s.scroll_to(1, t0);
    assert!(s.is_moving());

    let updates = s.tick(t0 + ms(50));
    assert_eq!(updates, vec![ScrollUpdate::Position(20.0)]);

    let updates = s.tick(t0 + ms(100));
    assert_eq!(
        updates,
        vec![ScrollUpdate::Position(40.0), ScrollUpdate::Settled(1)]
    );
    assert!(!s.is_moving());
    assert_eq!(s.nearest_page(), 1);

    assert!(s.tick(t0 + ms(200)).is_empty());
}

#[test]
fn test_position_updates_are_throttled() {
    let mut s = scroller();
    let t0 = Instant::now();
    s.scroll_to(1, t0);

    assert_eq!(s.tick(t0), vec![ScrollUpdate::Position(0.0)]);
    assert!(s.tick(t0 + ms(4)).is_empty());
    assert!(s.offset() > 0.0);

    let updates = s.tick(t0 + ms(10));
    assert!(
        matches!(updates.as_slice(), [ScrollUpdate::Position(x)] if (x - 4.0).abs() < 1e-3),
        "{:?}",
        updates
    );
}

#[test]
fn test_new_scroll_overwrites_pending_target() {
    let mut s = scroller();
    s.set_geometry(40.0, 3);
    let t0 = Instant::now();

    s.scroll_to(2, t0);
    s.tick(t0 + ms(50));
    s.scroll_to(1, t0 + ms(50));

    let updates = s.tick(t0 + ms(150));
    assert_eq!(updates.last(), Some(&ScrollUpdate::Settled(1)));
    assert_eq!(s.offset(), 40.0);
}

#[test]
fn test_scroll_target_is_clamped() {
    let mut s = scroller();
    let t0 = Instant::now();
    s.scroll_to(9, t0);
    let updates = s.tick(t0 + ms(100));
    assert_eq!(updates.last(), Some(&ScrollUpdate::Settled(1)));
}

#[test]
fn test_jump_emits_nothing() {
    let mut s = scroller();
    s.jump(1);
    assert_eq!(s.offset(), 40.0);
    assert!(!s.is_moving());
    assert!(s.tick(Instant::now()).is_empty());
}

#[test]
fn test_width_change_keeps_page() {
    let mut s = scroller();
    s.jump(1);
    s.set_geometry(80.0, 2);
    assert_eq!(s.offset(), 80.0);
}

// =============================================================================
// Dragging
// =============================================================================

#[test]
fn test_drag_follows_pointer_and_clamps() {
    let mut s = scroller();
    let t0 = Instant::now();

    assert_eq!(s.drag(30, t0), None);
    assert!(s.is_dragging());
    assert_eq!(s.drag(20, t0 + ms(10)), Some(ScrollUpdate::Position(10.0)));

    // Dragging right from page 0 cannot go below zero.
    s.drag(39, t0 + ms(20));
    assert_eq!(s.offset(), 0.0);
}

#[test]
fn test_release_snaps_to_nearest_page() {
    let mut s = scroller();
    let t0 = Instant::now();

    s.drag(35, t0);
    s.drag(5, t0 + ms(10)); // offset 30
    assert_eq!(s.nearest_page(), 1);

    s.release(t0 + ms(20));
    assert!(s.is_moving());
    let updates = s.tick(t0 + ms(200));
    assert_eq!(
        updates,
        vec![ScrollUpdate::Position(40.0), ScrollUpdate::Settled(1)]
    );
}

#[test]
fn test_release_on_page_boundary_settles_at_once() {
    let mut s = scroller();
    let t0 = Instant::now();

    s.drag(10, t0);
    let updates = s.release(t0 + ms(10));
    assert_eq!(
        updates,
        vec![ScrollUpdate::Position(0.0), ScrollUpdate::Settled(0)]
    );
    assert!(!s.is_moving());
}

#[test]
fn test_release_without_drag_is_ignored() {
    let mut s = scroller();
    assert!(s.release(Instant::now()).is_empty());
}
