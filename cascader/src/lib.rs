//! A paged cascading picker for terminal UIs.
//!
//! Options form a tree ([`OptionNode`]). The picker shows one page per level
//! of the current selection with a tab for each page; choosing an option with
//! children appends a page and scrolls to it, choosing a leaf reports the full
//! path through the `on_check` callback.

pub mod buffer;
pub mod config;
pub mod dataset;
pub mod error;
pub mod event;
pub mod layout;
pub mod mutate;
pub mod option;
pub mod pager;
pub mod picker;
pub mod resolve;
pub mod scroller;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;
pub mod underline;

pub use buffer::{Buffer, Cell};
pub use config::{MismatchPolicy, PickerConfig};
pub use error::{CascaderError, Result};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::{PickerLayout, Rect};
pub use option::{OptionList, OptionNode, PathEntry, SelectionPath};
pub use pager::{PageState, Pager};
pub use picker::{CheckCallback, ListState, Picker, PickerProps};
pub use resolve::{resolve, resolve_prefix, Level, PathMismatch, Resolved};
pub use scroller::{PagedScroller, ScrollUpdate};
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
pub use underline::{GeometryCache, TabGeometry, Underline};
