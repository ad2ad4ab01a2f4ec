//! Character-count font sizing.
//!
//! Sizes are a heuristic driven by text length, not by glyph metrics. The
//! breakpoints are calibration constants; changing them changes the output
//! for existing seeds.

/// Reference canvas width all pixel constants are expressed at.
pub const REFERENCE_WIDTH: u32 = 1080;

/// Reference canvas height (9:16 story).
pub const REFERENCE_HEIGHT: u32 = 1920;

/// Main text size for short excerpts.
pub const MAIN_FONT_MAX: f64 = 96.0;

/// Main text size for long excerpts.
pub const MAIN_FONT_MIN: f64 = 40.0;

/// Texts up to this many characters get the maximum size.
pub const SHRINK_START_CHARS: f64 = 240.0;

/// Characters over which the size falls from maximum to minimum.
pub const SHRINK_SPAN_CHARS: f64 = 1100.0;

/// Multi-item font size bounds.
pub const LIST_FONT_MIN: f64 = 22.0;
pub const LIST_FONT_MAX: f64 = 70.0;

/// Multi-item line height bounds.
pub const LINE_HEIGHT_MIN: f64 = 1.15;
pub const LINE_HEIGHT_MAX: f64 = 2.0;

/// Line height of the single-item main text.
pub const MAIN_LINE_HEIGHT: f64 = 1.35;

/// Ratio of `canvas_width` to the reference width.
pub fn scale_for(canvas_width: u32) -> f64 {
    f64::from(canvas_width) / f64::from(REFERENCE_WIDTH)
}

/// Canvas height for a 9:16 canvas of the given width.
pub fn canvas_height(canvas_width: u32) -> u32 {
    (f64::from(canvas_width) * 16.0 / 9.0).round() as u32
}

/// Scale a reference pixel size and round it.
pub fn scaled_px(px: f64, scale: f64) -> u32 {
    (px * scale).round().max(0.0) as u32
}

/// Main text size for a single-item story.
///
/// Full size up to 240 characters, minimum size from 1340 characters,
/// linear in between.
pub fn main_font_px(text_len: usize, canvas_width: u32) -> u32 {
    let scale = scale_for(canvas_width);
    let max = MAIN_FONT_MAX * scale;
    let min = MAIN_FONT_MIN * scale;

    let t = ((text_len as f64 - SHRINK_START_CHARS) / SHRINK_SPAN_CHARS).clamp(0.0, 1.0);
    (max - t * (max - min)).round() as u32
}

/// Uniform font size for multi-item layouts.
pub fn list_font_px(base_font_size: f64, canvas_width: u32) -> u32 {
    let base = if base_font_size.is_finite() {
        base_font_size.clamp(LIST_FONT_MIN, LIST_FONT_MAX)
    } else {
        LIST_FONT_MIN
    };
    scaled_px(base, scale_for(canvas_width))
}

/// Line height for multi-item layouts.
pub fn list_line_height(line_height: f64) -> f64 {
    if line_height.is_finite() {
        line_height.clamp(LINE_HEIGHT_MIN, LINE_HEIGHT_MAX)
    } else {
        LINE_HEIGHT_MIN
    }
}
