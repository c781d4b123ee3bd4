//! The cascading picker widget.
//!
//! `Picker` keeps three things in step: the level view model derived from the
//! selected path, the committed page of the horizontal pager, and the
//! underline that follows the active tab while pages scroll.

mod events;
mod render;
mod state;

pub use state::{CheckCallback, ListState, Picker, PickerProps};
