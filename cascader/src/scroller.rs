//! Paged horizontal scrolling.
//!
//! Plays the part of a paging scroll view: it owns the horizontal offset,
//! animates programmatic scrolls, follows drags, snaps to the nearest page on
//! release and reports a settle once the motion stops. Position updates are
//! throttled; the settle always carries a final exact position.

use std::time::{Duration, Instant};

use crate::transitions::TransitionConfig;

/// Notification emitted by the scroller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollUpdate {
    /// The horizontal offset changed.
    Position(f32),
    /// Motion stopped on this page.
    Settled(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Rest,
    Dragging { origin_x: u16, origin_offset: f32 },
    Animating { from: f32, page: usize, start: Instant },
}

#[derive(Debug, Clone)]
pub struct PagedScroller {
    offset: f32,
    page_width: f32,
    page_count: usize,
    motion: Motion,
    transition: TransitionConfig,
    throttle: Duration,
    last_emit: Option<Instant>,
}

impl PagedScroller {
    pub fn new(transition: TransitionConfig, throttle: Duration) -> Self {
        Self {
            offset: 0.0,
            page_width: 0.0,
            page_count: 1,
            motion: Motion::Rest,
            transition,
            throttle,
            last_emit: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn is_moving(&self) -> bool {
        self.motion != Motion::Rest
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging { .. })
    }

    /// Page nearest to the current offset.
    pub fn nearest_page(&self) -> usize {
        if self.page_width <= 0.0 {
            return 0;
        }
        let page = (self.offset / self.page_width).round().max(0.0) as usize;
        page.min(self.max_page())
    }

    /// Update page geometry. A width change keeps the view on the same page.
    pub fn set_geometry(&mut self, page_width: f32, page_count: usize) {
        let page_count = page_count.max(1);
        if page_width != self.page_width && self.page_width > 0.0 {
            let page = self.offset / self.page_width;
            self.offset = page * page_width;
        }
        self.page_width = page_width;
        self.page_count = page_count;
        self.offset = self.offset.clamp(0.0, self.max_offset());
        if let Motion::Animating { page, .. } = &mut self.motion {
            *page = (*page).min(page_count - 1);
        }
    }

    /// Move to `page` immediately. Emits nothing.
    pub fn jump(&mut self, page: usize) {
        self.motion = Motion::Rest;
        self.offset = self.page_offset(page);
    }

    /// Start an animated scroll to `page`, replacing any motion in progress.
    pub fn scroll_to(&mut self, page: usize, now: Instant) {
        let page = page.min(self.max_page());
        self.motion = Motion::Animating {
            from: self.offset,
            page,
            start: now,
        };
    }

    /// Follow a drag at column `x`.
    pub fn drag(&mut self, x: u16, now: Instant) -> Option<ScrollUpdate> {
        let (origin_x, origin_offset) = match self.motion {
            Motion::Dragging {
                origin_x,
                origin_offset,
            } => (origin_x, origin_offset),
            _ => {
                self.motion = Motion::Dragging {
                    origin_x: x,
                    origin_offset: self.offset,
                };
                (x, self.offset)
            }
        };

        let delta = x as f32 - origin_x as f32;
        let offset = (origin_offset - delta).clamp(0.0, self.max_offset());
        if offset == self.offset {
            return None;
        }
        self.offset = offset;
        self.throttled(now)
    }

    /// End a drag, snapping to the nearest page.
    pub fn release(&mut self, now: Instant) -> Vec<ScrollUpdate> {
        if !self.is_dragging() {
            return Vec::new();
        }
        let page = self.nearest_page();
        if self.offset == self.page_offset(page) {
            self.motion = Motion::Rest;
            return vec![ScrollUpdate::Position(self.offset), ScrollUpdate::Settled(page)];
        }
        self.scroll_to(page, now);
        self.tick(now)
    }

    /// Advance an animated scroll.
    pub fn tick(&mut self, now: Instant) -> Vec<ScrollUpdate> {
        let Motion::Animating { from, page, start } = self.motion else {
            return Vec::new();
        };

        let to = self.page_offset(page);
        let progress = self.transition.progress(now.saturating_duration_since(start));
        if progress >= 1.0 {
            self.offset = to;
            self.motion = Motion::Rest;
            self.last_emit = Some(now);
            return vec![ScrollUpdate::Position(to), ScrollUpdate::Settled(page)];
        }

        self.offset = from + (to - from) * progress;
        self.throttled(now).into_iter().collect()
    }

    fn throttled(&mut self, now: Instant) -> Option<ScrollUpdate> {
        if let Some(last) = self.last_emit {
            if now.saturating_duration_since(last) < self.throttle {
                return None;
            }
        }
        self.last_emit = Some(now);
        Some(ScrollUpdate::Position(self.offset))
    }

    fn page_offset(&self, page: usize) -> f32 {
        page.min(self.max_page()) as f32 * self.page_width
    }

    fn max_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    fn max_offset(&self) -> f32 {
        self.max_page() as f32 * self.page_width
    }
}
