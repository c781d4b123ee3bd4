//! Picker configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//!
//! ```json
//! { "active_color": "#3D7EFF", "page_scroll_ms": 150, "mismatch_policy": "reject" }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CascaderError, Result};
use crate::transitions::{Easing, TransitionConfig};
use crate::types::Rgb;

/// What to do with a value that does not match the option tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchPolicy {
    /// Keep the matching prefix and offer the mismatching level unselected.
    #[default]
    Truncate,
    /// Ignore the new value and keep the current selection.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Color of the active tab text, the underline and the checked option.
    pub active_color: Rgb,
    /// Color of the tab bar baseline.
    pub baseline_color: Rgb,
    /// Color of tab labels and options.
    pub text_color: Rgb,
    /// Underline thickness in rows.
    pub underline_height: u16,
    /// Total widget height in rows, clamped to the available area.
    pub container_height: u16,
    /// Columns on each side of a tab label.
    pub tab_margin: u16,
    /// Tab text shown for a level with nothing selected.
    pub placeholder: String,
    /// Mark appended to the checked option.
    pub check_mark: String,
    /// Duration of an animated page scroll.
    pub page_scroll_ms: u64,
    pub easing: Easing,
    /// Minimum interval between scroll position updates.
    pub scroll_event_throttle_ms: u64,
    pub mismatch_policy: MismatchPolicy,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            active_color: Rgb::new(0xFF, 0x7F, 0x24),
            baseline_color: Rgb::new(0xCC, 0xCC, 0xCC),
            text_color: Rgb::new(0xE0, 0xE0, 0xE0),
            underline_height: 1,
            container_height: 400,
            tab_margin: 2,
            placeholder: "请选择".to_string(),
            check_mark: "√".to_string(),
            page_scroll_ms: 250,
            easing: Easing::EaseOut,
            scroll_event_throttle_ms: 8,
            mismatch_policy: MismatchPolicy::Truncate,
        }
    }
}

impl PickerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(CascaderError::Config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `path`, falling back to defaults if it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn page_transition(&self) -> TransitionConfig {
        TransitionConfig::new(Duration::from_millis(self.page_scroll_ms), self.easing)
    }

    pub fn scroll_event_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_event_throttle_ms)
    }
}
