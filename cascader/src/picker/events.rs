//! Input handling for the picker.

use std::time::Instant;

use super::Picker;
use crate::event::{Event, Key, MouseButton};
use crate::option::SelectionPath;

impl Picker {
    /// Handle an input event. Returns the final path when it completed a
    /// selection.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Option<SelectionPath> {
        match event {
            Event::Key { key, modifiers } if !modifiers.ctrl && !modifiers.alt => {
                self.handle_key(*key, now)
            }
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                self.handle_press(*x, *y, now);
                None
            }
            Event::Drag {
                x,
                button: MouseButton::Left,
                ..
            } => {
                self.handle_drag(*x, now);
                None
            }
            Event::Release {
                button: MouseButton::Left,
                ..
            } => self.handle_release(now),
            Event::Scroll {
                x,
                y,
                delta_x,
                delta_y,
            } => {
                self.handle_wheel(*x, *y, *delta_x, *delta_y, now);
                None
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: Key, now: Instant) -> Option<SelectionPath> {
        let page = self.pager.destination();
        match key {
            Key::Left | Key::BackTab => {
                if page > 0 {
                    self.scroll_to(page - 1, now);
                }
                None
            }
            Key::Right | Key::Tab => {
                if page + 1 < self.levels.len() {
                    self.scroll_to(page + 1, now);
                }
                None
            }
            Key::Up => {
                self.move_cursor(page, -1);
                None
            }
            Key::Down => {
                self.move_cursor(page, 1);
                None
            }
            Key::PageUp => {
                self.move_cursor(page, -(self.page_rows() as isize));
                None
            }
            Key::PageDown => {
                self.move_cursor(page, self.page_rows() as isize);
                None
            }
            Key::Home => {
                self.move_cursor(page, isize::MIN);
                None
            }
            Key::End => {
                self.move_cursor(page, isize::MAX);
                None
            }
            Key::Enter | Key::Char(' ') => {
                let cursor = self.lists.get(page)?.cursor;
                self.select_logged(page, cursor, now)
            }
            _ => None,
        }
    }

    fn handle_press(&mut self, x: u16, y: u16, now: Instant) {
        self.pending_press = None;
        if let Some(tab) = self.layout.tab_at(x, y) {
            self.select_tab(tab, now);
        } else if self.layout.content.contains(x, y) {
            self.pending_press = Some((x, y));
        }
    }

    fn handle_drag(&mut self, x: u16, now: Instant) {
        // Drags only start from a press in the content area.
        if !self.scroller.is_dragging() && self.pending_press.is_none() {
            return;
        }
        if let Some(update) = self.scroller.drag(x, now) {
            self.apply_scroll_updates([update]);
        }
    }

    fn handle_release(&mut self, now: Instant) -> Option<SelectionPath> {
        if self.scroller.is_dragging() {
            self.pending_press = None;
            let page = self.scroller.nearest_page();
            self.pager.begin(page);
            let updates = self.scroller.release(now);
            self.apply_scroll_updates(updates);
            return None;
        }

        let (x, y) = self.pending_press.take()?;
        let (page, option) = self.option_at(x, y)?;
        self.select_logged(page, option, now)
    }

    fn handle_wheel(&mut self, x: u16, y: u16, delta_x: i16, delta_y: i16, now: Instant) {
        if !self.layout.content.contains(x, y) {
            return;
        }

        if delta_x != 0 {
            let page = self.pager.destination();
            if delta_x < 0 && page > 0 {
                self.scroll_to(page - 1, now);
            } else if delta_x > 0 && page + 1 < self.levels.len() {
                self.scroll_to(page + 1, now);
            }
        }

        if delta_y != 0 {
            let Some(page) = self.page_at(x) else {
                return;
            };
            let rows = self.page_rows();
            let len = self.levels[page].siblings.len();
            let list = &mut self.lists[page];
            let offset = list.offset as isize + delta_y as isize;
            list.offset = offset.clamp(0, len.saturating_sub(rows) as isize) as usize;
            self.dirty = true;
        }
    }

    fn move_cursor(&mut self, page: usize, delta: isize) {
        let Some(len) = self.levels.get(page).map(|level| level.siblings.len()) else {
            return;
        };
        let Some(list) = self.lists.get_mut(page) else {
            return;
        };
        let cursor = (list.cursor as isize).saturating_add(delta);
        list.cursor = cursor.clamp(0, len.saturating_sub(1) as isize) as usize;
        self.keep_cursor_visible(page);
        self.dirty = true;
    }

    fn select_logged(&mut self, page: usize, option: usize, now: Instant) -> Option<SelectionPath> {
        match self.select_option(page, option, now) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("ignored selection: {}", e);
                None
            }
        }
    }

    /// Page under column `x` at the current scroll offset.
    fn page_at(&self, x: u16) -> Option<usize> {
        let content = self.layout.content;
        let width = content.width as f32;
        if width <= 0.0 || x < content.x || x >= content.right() {
            return None;
        }
        let absolute = self.scroller.offset() + (x - content.x) as f32;
        let page = (absolute / width).floor() as usize;
        (page < self.levels.len()).then_some(page)
    }

    /// Page and option under `(x, y)`.
    fn option_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let content = self.layout.content;
        if !content.contains(x, y) {
            return None;
        }
        let page = self.page_at(x)?;
        let option = self.lists.get(page)?.offset + (y - content.y) as usize;
        (option < self.levels[page].siblings.len()).then_some((page, option))
    }

    fn page_rows(&self) -> usize {
        self.layout.content.height as usize
    }
}
