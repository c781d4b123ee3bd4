//! Widget area layout and tab measurement.

use crate::text::display_width;
use crate::underline::TabGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Regions of the picker inside its area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickerLayout {
    /// The whole widget, `container_height` clamped to the area.
    pub area: Rect,
    /// Row holding the tab labels.
    pub tabs: Rect,
    /// Rows holding the baseline and underline.
    pub underline: Rect,
    /// Paged option lists.
    pub content: Rect,
    /// Clickable extent of each tab, margins included.
    pub tab_rects: Vec<Rect>,
    /// Measured label extent of each tab, relative to `area.x`.
    pub tab_geometry: Vec<TabGeometry>,
}

impl PickerLayout {
    /// Index of the tab under `(x, y)`.
    pub fn tab_at(&self, x: u16, y: u16) -> Option<usize> {
        self.tab_rects.iter().position(|rect| rect.contains(x, y))
    }

    /// Page width in columns.
    pub fn page_width(&self) -> u16 {
        self.content.width
    }
}

/// Lay out the picker in `area`.
pub fn layout(
    area: Rect,
    labels: &[&str],
    container_height: u16,
    underline_height: u16,
    tab_margin: u16,
) -> PickerLayout {
    let height = container_height.min(area.height);
    let area = Rect::new(area.x, area.y, area.width, height);

    let tabs_height = height.min(1);
    let underline_height = underline_height.min(height - tabs_height);
    let tabs = Rect::new(area.x, area.y, area.width, tabs_height);
    let underline = Rect::new(area.x, tabs.bottom(), area.width, underline_height);
    let content = Rect::new(
        area.x,
        underline.bottom(),
        area.width,
        height - tabs_height - underline_height,
    );

    let tab_geometry = measure_tabs(labels, tab_margin);
    let tab_rects = tab_geometry
        .iter()
        .map(|g| {
            let left = (g.x as u16).saturating_sub(tab_margin);
            let width = (g.width as u16).saturating_add(tab_margin.saturating_mul(2));
            clip_to(Rect::new(area.x.saturating_add(left), tabs.y, width, tabs_height), tabs)
        })
        .collect();

    PickerLayout {
        area,
        tabs,
        underline,
        content,
        tab_rects,
        tab_geometry,
    }
}

/// Measure tab labels laid out left to right with `margin` columns on each
/// side. Geometry covers the label text only.
pub fn measure_tabs(labels: &[&str], margin: u16) -> Vec<TabGeometry> {
    let margin = margin as u32;
    let mut x = 0u32;
    labels
        .iter()
        .map(|label| {
            let width = display_width(label) as u32;
            let geometry = TabGeometry::new(x.saturating_add(margin) as f32, width as f32);
            x = x
                .saturating_add(width)
                .saturating_add(margin.saturating_mul(2));
            geometry
        })
        .collect()
}

fn clip_to(rect: Rect, bounds: Rect) -> Rect {
    let x = rect.x.min(bounds.right());
    let right = rect.right().min(bounds.right());
    Rect::new(x, rect.y, right.saturating_sub(x), rect.height)
}
