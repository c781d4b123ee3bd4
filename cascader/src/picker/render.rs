use super::Picker;
use crate::buffer::{Buffer, Cell};
use crate::layout::Rect;
use crate::text::{char_width, display_width, truncate_to_width};
use crate::types::{Rgb, TextStyle};

const BASELINE: char = '─';
const UNDERLINE: char = '━';

impl Picker {
    /// Draw the picker using the geometry of the last [`Picker::layout`].
    pub fn render(&self, buf: &mut Buffer) {
        if self.layout.area.is_empty() {
            return;
        }
        self.render_tabs(buf);
        self.render_underline(buf);
        self.render_pages(buf);
    }

    fn render_tabs(&self, buf: &mut Buffer) {
        let tabs = self.layout.tabs;
        let active = self.pager.active();

        for (index, (level, geometry)) in self
            .levels
            .iter()
            .zip(&self.layout.tab_geometry)
            .enumerate()
        {
            let label = if level.is_selected() {
                level.label.as_str()
            } else {
                self.config.placeholder.as_str()
            };
            let (fg, style) = if index == active {
                (self.config.active_color, TextStyle::new().bold())
            } else if level.is_selected() {
                (self.config.text_color, TextStyle::new())
            } else {
                (self.config.text_color, TextStyle::new().dim())
            };
            let x = tabs.x as i32 + geometry.x as i32;
            put_clipped(buf, x, tabs.y, label, fg, style, tabs);
        }
    }

    fn render_underline(&self, buf: &mut Buffer) {
        let area = self.layout.underline;
        if area.is_empty() {
            return;
        }

        let current = self.underline.current();
        let start = area.x as f32 + current.x;
        let from = start.round().max(area.x as f32) as u16;
        let to = (start + current.width).round().min(area.right() as f32) as u16;

        for y in area.y..area.bottom() {
            let last_row = y + 1 == area.bottom();
            for x in area.x..area.right() {
                if x >= from && x < to {
                    buf.set(x, y, Cell::new(UNDERLINE).with_fg(self.config.active_color));
                } else if last_row {
                    buf.set(x, y, Cell::new(BASELINE).with_fg(self.config.baseline_color));
                }
            }
        }
    }

    fn render_pages(&self, buf: &mut Buffer) {
        let content = self.layout.content;
        if content.is_empty() {
            return;
        }

        let width = content.width as i32;
        let offset = self.scroller.offset().round() as i32;
        let focused = self.pager.destination();

        for (page, (level, list)) in self.levels.iter().zip(&self.lists).enumerate() {
            let left = page as i32 * width - offset;
            if left >= width || left + width <= 0 {
                continue;
            }

            let text_x = content.x as i32 + left + 1;
            let text_width = (content.width as usize).saturating_sub(2);
            for row in 0..content.height {
                let index = list.offset + row as usize;
                let Some(option) = level.siblings.get(index) else {
                    break;
                };

                let checked = level.is_selected() && option.value == level.value;
                let text = if checked {
                    format!("{}    {}", option.label, self.config.check_mark)
                } else {
                    option.label.clone()
                };
                let fg = if checked {
                    self.config.active_color
                } else {
                    self.config.text_color
                };
                let style = if page == focused && index == list.cursor {
                    TextStyle::new().bold()
                } else {
                    TextStyle::new()
                };

                let y = content.y + row;
                if page == focused && index == list.cursor {
                    put_clipped(buf, text_x - 1, y, "›", fg, style, content);
                }
                let text = truncate_to_width(&text, text_width);
                put_clipped(buf, text_x, y, &text, fg, style, content);
            }
        }
    }
}

/// Write `text` starting at column `x`, which may lie left of `clip`.
/// Only columns inside `clip` are drawn.
fn put_clipped(buf: &mut Buffer, x: i32, y: u16, text: &str, fg: Rgb, style: TextStyle, clip: Rect) {
    let mut col = x;
    let mut chars = text.chars();
    // Skip whatever lies left of the clip.
    while col < clip.x as i32 {
        let Some(ch) = chars.next() else {
            return;
        };
        col += char_width(ch) as i32;
    }
    let rest: String = chars.collect();
    if display_width(&rest) == 0 || col >= clip.right() as i32 {
        return;
    }
    buf.put_str(col as u16, y, &rest, fg, style, clip.right());
}
