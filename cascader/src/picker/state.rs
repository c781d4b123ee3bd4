//! Picker state and operations.

use std::time::Instant;

use crate::config::{MismatchPolicy, PickerConfig};
use crate::error::Result;
use crate::layout::{layout, PickerLayout, Rect};
use crate::mutate::{self, Selection};
use crate::option::{OptionList, PathEntry, SelectionPath};
use crate::pager::{PageState, Pager};
use crate::resolve::{resolve_prefix, selected_path, Level};
use crate::scroller::{PagedScroller, ScrollUpdate};
use crate::underline::{TabGeometry, Underline};

/// Called with the final path once a leaf option is chosen.
pub type CheckCallback = Box<dyn FnMut(&[PathEntry])>;

/// Inputs of a picker.
pub struct PickerProps {
    pub data: OptionList,
    pub value: SelectionPath,
    pub on_check: Option<CheckCallback>,
    pub config: PickerConfig,
}

impl PickerProps {
    pub fn new(data: OptionList) -> Self {
        Self {
            data,
            value: Vec::new(),
            on_check: None,
            config: PickerConfig::default(),
        }
    }

    /// Props over the bundled region dataset.
    pub fn regions() -> Result<Self> {
        Ok(Self::new(crate::dataset::regions()?))
    }

    pub fn value(mut self, value: SelectionPath) -> Self {
        self.value = value;
        self
    }

    pub fn on_check(mut self, f: impl FnMut(&[PathEntry]) + 'static) -> Self {
        self.on_check = Some(Box::new(f));
        self
    }

    pub fn config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }
}

/// Vertical scroll and keyboard cursor of one page's option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListState {
    pub offset: usize,
    pub cursor: usize,
}

impl ListState {
    fn for_level(level: &Level) -> Self {
        let index = level.initial_scroll_index.unwrap_or(0);
        Self {
            offset: index,
            cursor: index,
        }
    }
}

pub struct Picker {
    data: OptionList,
    value: SelectionPath,
    pub(super) levels: Vec<Level>,
    pub(super) lists: Vec<ListState>,
    pub(super) pager: Pager,
    pub(super) underline: Underline,
    pub(super) scroller: PagedScroller,
    pub(super) layout: PickerLayout,
    pub(super) config: PickerConfig,
    on_check: Option<CheckCallback>,
    /// Press in the content area waiting for release.
    pub(super) pending_press: Option<(u16, u16)>,
    pub(super) dirty: bool,
}

impl std::fmt::Debug for Picker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picker")
            .field("value", &self.value)
            .field("levels", &self.levels.len())
            .field("active", &self.pager.active())
            .field("state", &self.pager.state())
            .finish_non_exhaustive()
    }
}

impl Picker {
    pub fn new(props: PickerProps) -> Self {
        let PickerProps {
            data,
            value,
            on_check,
            config,
        } = props;

        let scroller = PagedScroller::new(config.page_transition(), config.scroll_event_throttle());
        let mut picker = Self {
            levels: vec![Level::placeholder(data.clone())],
            data,
            value: Vec::new(),
            lists: vec![ListState::default()],
            pager: Pager::new(1, 0),
            underline: Underline::new(),
            scroller,
            layout: PickerLayout::default(),
            config,
            on_check,
            pending_press: None,
            dirty: true,
        };
        picker.apply_value(value);
        picker
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The last value set, or the path selected since by tapping options.
    pub fn value(&self) -> &[PathEntry] {
        &self.value
    }

    pub fn data(&self) -> &OptionList {
        &self.data
    }

    /// The committed page.
    pub fn active(&self) -> usize {
        self.pager.active()
    }

    pub fn page_state(&self) -> PageState {
        self.pager.state()
    }

    pub fn underline(&self) -> TabGeometry {
        self.underline.current()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroller.offset()
    }

    pub fn list_state(&self, page: usize) -> Option<ListState> {
        self.lists.get(page).copied()
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn last_layout(&self) -> &PickerLayout {
        &self.layout
    }

    /// True while a page scroll or drag is in progress.
    pub fn is_animating(&self) -> bool {
        self.scroller.is_moving()
    }

    /// Whether anything visible changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        let moved = self.underline.take_changed();
        std::mem::take(&mut self.dirty) || moved
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Replace the selected value. A value structurally equal to the current
    /// selection, including one made by tapping options, is a no-op.
    /// Returns true if the view model was rebuilt.
    pub fn set_value(&mut self, value: SelectionPath) -> bool {
        if value == self.value {
            return false;
        }
        self.apply_value(value)
    }

    fn apply_value(&mut self, value: SelectionPath) -> bool {
        let resolved = resolve_prefix(&self.data, &value);
        let levels = match (resolved.mismatch, self.config.mismatch_policy) {
            (None, _) => resolved.levels,
            (Some(m), MismatchPolicy::Truncate) => {
                log::warn!(
                    "value does not match option tree at depth {} ({:?}), keeping {} levels",
                    m.depth,
                    m.value,
                    resolved.levels.len()
                );
                resolved.levels
            }
            (Some(m), MismatchPolicy::Reject) => {
                log::warn!(
                    "value does not match option tree at depth {} ({:?}), ignored",
                    m.depth,
                    m.value
                );
                return false;
            }
        };

        let selected = levels.iter().filter(|level| level.is_selected()).count();
        self.value = value;
        self.levels = levels;
        self.lists = self.levels.iter().map(ListState::for_level).collect();
        self.sync_page_count();

        let active = selected.saturating_sub(1);
        self.pager.jump(active);
        self.scroller.jump(self.pager.active());
        self.underline.snap(self.pager.active());
        self.pending_press = None;
        self.dirty = true;
        log::debug!(
            "value set: {} levels, active page {}",
            self.levels.len(),
            self.pager.active()
        );
        true
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Choose option `option` on page `level`.
    ///
    /// Returns the final path when a leaf was chosen; `on_check` has been
    /// called with it by then. Choosing a branch scrolls to the new page.
    pub fn select_option(
        &mut self,
        level: usize,
        option: usize,
        now: Instant,
    ) -> Result<Option<SelectionPath>> {
        let selection = mutate::select_at(&mut self.levels, level, option)?;

        let kept_offset = self.lists.get(level).map(|list| list.offset);
        self.lists.truncate(level);
        self.lists
            .extend(self.levels[level..].iter().map(ListState::for_level));
        // Keep the tapped list where it was.
        if let Some(list) = self.lists.get_mut(level) {
            list.cursor = option;
            if let Some(offset) = kept_offset {
                list.offset = offset;
            }
        }
        self.sync_page_count();
        self.value = selected_path(&self.levels);
        self.dirty = true;

        match selection {
            Selection::Advance { page } => {
                log::debug!("selected branch on level {}, advancing to {}", level, page);
                self.scroll_to(page, now);
                Ok(None)
            }
            Selection::Checked(path) => {
                log::debug!("selected leaf on level {}: {:?}", level, path);
                if let Some(on_check) = self.on_check.as_mut() {
                    on_check(&path);
                }
                Ok(Some(path))
            }
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Tab tapped: scroll to its page.
    pub fn select_tab(&mut self, index: usize, now: Instant) {
        self.scroll_to(index, now);
    }

    /// Request an animated scroll to `index`. `active` is committed when the
    /// scroll settles.
    pub fn scroll_to(&mut self, index: usize, now: Instant) {
        let target = self.pager.begin(index);
        self.scroller.scroll_to(target, now);
    }

    /// A tab was measured.
    pub fn on_tab_layout(&mut self, index: usize, geometry: TabGeometry) {
        self.underline
            .on_tab_layout(index, geometry, self.pager.active());
    }

    /// The content scrolled to `offset_x`.
    pub fn on_scroll(&mut self, offset_x: f32) {
        self.underline
            .on_scroll(offset_x, self.scroller.page_width(), self.pager.active());
    }

    /// The content settled on `page`.
    pub fn on_momentum_end(&mut self, page: usize) {
        if self.pager.settle(page) {
            self.dirty = true;
        }
        self.underline.snap(self.pager.active());
    }

    /// Advance animations. Returns true if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let updates = self.scroller.tick(now);
        let animated = !updates.is_empty();
        self.apply_scroll_updates(updates);
        animated || self.dirty
    }

    pub(super) fn apply_scroll_updates(&mut self, updates: impl IntoIterator<Item = ScrollUpdate>) {
        for update in updates {
            match update {
                ScrollUpdate::Position(x) => {
                    self.on_scroll(x);
                    self.dirty = true;
                }
                ScrollUpdate::Settled(page) => self.on_momentum_end(page),
            }
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Lay the picker out in `area`, reporting changed tab measurements.
    pub fn layout(&mut self, area: Rect) -> &PickerLayout {
        let labels: Vec<&str> = self
            .levels
            .iter()
            .map(|level| {
                if level.is_selected() {
                    level.label.as_str()
                } else {
                    self.config.placeholder.as_str()
                }
            })
            .collect();
        let new_layout = layout(
            area,
            &labels,
            self.config.container_height,
            self.config.underline_height,
            self.config.tab_margin,
        );

        let page_width = new_layout.page_width() as f32;
        if page_width != self.scroller.page_width() {
            self.scroller.set_geometry(page_width, self.levels.len());
            if !self.scroller.is_moving() {
                self.scroller.jump(self.pager.active());
            }
        }

        for (index, geometry) in new_layout.tab_geometry.iter().enumerate() {
            if self.underline.geometry().get(index) != Some(*geometry) {
                self.on_tab_layout(index, *geometry);
            }
        }

        let resized = new_layout.content.height != self.layout.content.height;
        self.layout = new_layout;
        if resized {
            self.keep_cursors_visible();
        }
        &self.layout
    }

    fn sync_page_count(&mut self) {
        let count = self.levels.len();
        self.pager.set_page_count(count);
        self.underline.sync_page_count(count);
        self.scroller.set_geometry(self.scroller.page_width(), count);
    }

    fn visible_rows(&self) -> Option<usize> {
        let rows = self.layout.content.height as usize;
        (rows > 0).then_some(rows)
    }

    /// Clamp every list so its cursor is on screen.
    fn keep_cursors_visible(&mut self) {
        for page in 0..self.lists.len() {
            self.keep_cursor_visible(page);
        }
    }

    /// Clamp the list of `page` so its cursor is on screen.
    pub(super) fn keep_cursor_visible(&mut self, page: usize) {
        let Some(rows) = self.visible_rows() else {
            return;
        };
        let (Some(list), Some(level)) = (self.lists.get_mut(page), self.levels.get(page)) else {
            return;
        };
        let len = level.siblings.len();
        list.cursor = list.cursor.min(len.saturating_sub(1));
        if list.cursor < list.offset {
            list.offset = list.cursor;
        } else if list.cursor >= list.offset + rows {
            list.offset = list.cursor + 1 - rows;
        }
        list.offset = list.offset.min(len.saturating_sub(rows));
    }
}
