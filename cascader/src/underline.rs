//! Tab geometry cache and the animated underline beneath the active tab.

use std::collections::HashMap;

/// Measured horizontal extent of one tab, in columns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabGeometry {
    pub x: f32,
    pub width: f32,
}

impl TabGeometry {
    pub const fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    /// Linear blend toward `other` by `t` in `[0, 1]`.
    pub fn lerp(self, other: TabGeometry, t: f32) -> TabGeometry {
        TabGeometry {
            x: self.x + (other.x - self.x) * t,
            width: self.width + (other.width - self.width) * t,
        }
    }
}

/// Page index -> tab geometry. Cleared whenever the page count changes.
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    page_count: usize,
    tabs: HashMap<usize, TabGeometry>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<TabGeometry> {
        self.tabs.get(&index).copied()
    }

    /// Record a measurement. Returns true if it differs from the cached one.
    pub fn insert(&mut self, index: usize, geometry: TabGeometry) -> bool {
        self.tabs.insert(index, geometry) != Some(geometry)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Drop all measurements if the number of pages changed.
    pub fn sync_page_count(&mut self, page_count: usize) {
        if page_count != self.page_count {
            self.page_count = page_count;
            self.tabs.clear();
        }
    }
}

/// Underline offset and width, plus the cache they are derived from.
#[derive(Debug, Clone, Default)]
pub struct Underline {
    geometry: GeometryCache,
    current: TabGeometry,
    changed: bool,
}

impl Underline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current underline offset and width.
    pub fn current(&self) -> TabGeometry {
        self.current
    }

    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    pub fn sync_page_count(&mut self, page_count: usize) {
        self.geometry.sync_page_count(page_count);
    }

    /// Whether the underline moved since the last call.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// A tab was measured. Snaps the underline if it is the active tab.
    pub fn on_tab_layout(&mut self, index: usize, geometry: TabGeometry, active: usize) {
        self.geometry.insert(index, geometry);
        if index == active {
            self.set(geometry);
        }
    }

    /// Snap to the active tab. No-op when the tab has not been measured.
    pub fn snap(&mut self, active: usize) {
        if let Some(geometry) = self.geometry.get(active) {
            self.set(geometry);
        }
    }

    /// Track a horizontal scroll position.
    ///
    /// `offset_x / page_width - active` is the fraction of the way toward the
    /// neighbouring page. The underline blends linearly toward that page's tab.
    /// If either tab has not been measured yet the update is skipped.
    pub fn on_scroll(&mut self, offset_x: f32, page_width: f32, active: usize) {
        if page_width <= 0.0 {
            return;
        }
        let ratio = (offset_x / page_width - active as f32).clamp(-1.0, 1.0);

        let Some(from) = self.geometry.get(active) else {
            return;
        };
        if ratio == 0.0 {
            self.set(from);
            return;
        }

        let neighbour = if ratio > 0.0 {
            active.checked_add(1)
        } else {
            active.checked_sub(1)
        };
        let Some(to) = neighbour.and_then(|index| self.geometry.get(index)) else {
            return;
        };

        self.set(from.lerp(to, ratio.abs()));
    }

    fn set(&mut self, geometry: TabGeometry) {
        if self.current != geometry {
            self.current = geometry;
            self.changed = true;
        }
    }
}
