//! Display options and configuration.

use serde::{Deserialize, Serialize};

/// Default watermark line.
pub const DEFAULT_WATERMARK: &str = "Azkar Generator • ATHAR";

/// Column count bounds.
pub const MIN_COLUMNS: u8 = 1;
pub const MAX_COLUMNS: u8 = 3;

/// Caller-owned options for one layout pass.
///
/// Font sizes are expressed in pixels at the 1080 px reference width and are
/// scaled to the actual canvas by the layout engine. The engine reads these
/// values and never modifies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Render the benefit note when an item has one
    pub show_benefit: bool,

    /// Render the count badge and count description when present
    pub show_count: bool,

    /// Render the watermark line
    pub show_watermark: bool,

    /// Watermark line text
    pub watermark_text: String,

    /// Number of columns in multi-item layouts (1-3)
    pub columns: u8,

    /// Maximum number of items rendered; extra items are dropped
    pub max_items: usize,

    /// Base font size for multi-item layouts
    pub base_font_size: f64,

    /// Line height multiplier for multi-item layouts
    pub line_height: f64,
}

impl DisplayOptions {
    /// Create new display options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the benefit note.
    pub fn with_benefit(mut self, show: bool) -> Self {
        self.show_benefit = show;
        self
    }

    /// Show or hide the count badge and description.
    pub fn with_count(mut self, show: bool) -> Self {
        self.show_count = show;
        self
    }

    /// Show or hide the watermark.
    pub fn with_watermark(mut self, show: bool) -> Self {
        self.show_watermark = show;
        self
    }

    /// Set the watermark text.
    pub fn with_watermark_text(mut self, text: impl Into<String>) -> Self {
        self.watermark_text = text.into();
        self
    }

    /// Set the column count.
    pub fn with_columns(mut self, columns: u8) -> Self {
        self.columns = columns.clamp(MIN_COLUMNS, MAX_COLUMNS);
        self
    }

    /// Set the maximum rendered item count.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items.max(1);
        self
    }

    /// Set the multi-item base font size.
    pub fn with_base_font_size(mut self, px: f64) -> Self {
        self.base_font_size = px;
        self
    }

    /// Set the multi-item line height.
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Column count clamped to the supported range.
    pub fn effective_columns(&self) -> usize {
        usize::from(self.columns.clamp(MIN_COLUMNS, MAX_COLUMNS))
    }

    /// Item limit, never below one.
    pub fn effective_max_items(&self) -> usize {
        self.max_items.max(1)
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_benefit: true,
            show_count: true,
            show_watermark: true,
            watermark_text: DEFAULT_WATERMARK.to_string(),
            columns: 1,
            max_items: 6,
            base_font_size: 36.0,
            line_height: 1.5,
        }
    }
}
