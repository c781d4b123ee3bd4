//! Committed page tracking.
//!
//! A paged scroll is a two-phase commit: the target page is known as soon as
//! the scroll is requested, but `active` only changes once the scroll view
//! reports that it settled.

/// Scroll phase of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Idle,
    Scrolling { target: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Pager {
    active: usize,
    page_count: usize,
    state: PageState,
}

impl Pager {
    pub fn new(page_count: usize, active: usize) -> Self {
        let mut pager = Self {
            active: 0,
            page_count,
            state: PageState::Idle,
        };
        pager.active = pager.clamp(active);
        pager
    }

    /// The committed page.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Pending scroll target, if a scroll is in flight.
    pub fn target(&self) -> Option<usize> {
        match self.state {
            PageState::Idle => None,
            PageState::Scrolling { target } => Some(target),
        }
    }

    /// Page the view is at or heading to.
    pub fn destination(&self) -> usize {
        self.target().unwrap_or(self.active)
    }

    /// Update the number of pages, keeping `active` valid.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.active = self.clamp(self.active);
        if let PageState::Scrolling { target } = self.state {
            self.state = PageState::Scrolling {
                target: self.clamp(target),
            };
        }
    }

    /// Start a scroll toward `index`. Overwrites any pending target.
    /// Returns the clamped target.
    pub fn begin(&mut self, index: usize) -> usize {
        let target = self.clamp(index);
        self.state = PageState::Scrolling { target };
        log::debug!("pager: scrolling {} -> {}", self.active, target);
        target
    }

    /// Move to `index` without a scroll phase.
    pub fn jump(&mut self, index: usize) -> bool {
        self.state = PageState::Idle;
        self.commit(index)
    }

    /// The scroll view settled on `page`. Returns true if `active` changed.
    pub fn settle(&mut self, page: usize) -> bool {
        self.state = PageState::Idle;
        self.commit(page)
    }

    fn commit(&mut self, page: usize) -> bool {
        let page = self.clamp(page);
        if page == self.active {
            return false;
        }
        log::debug!("pager: committed page {} (was {})", page, self.active);
        self.active = page;
        true
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.page_count.saturating_sub(1))
    }
}
