//! Render tree produced by the layout engine.
//!
//! The tree is renderer-agnostic: every size is a resolved pixel value at the
//! target canvas width, and every optional block is either present or absent.

use crate::design::{Decorations, FontFamily, Palette};
use serde::Serialize;

/// Fully resolved layout for one story image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    /// Canvas geometry
    pub canvas: Canvas,

    /// Base direction of the main text
    pub direction: TextDirection,

    /// Background palette and decorative layers
    pub background: Background,

    /// Main text font family
    pub font: FontFamily,

    /// Title row
    pub header: Header,

    /// Main content
    pub body: Body,

    /// Bottom row
    pub footer: Footer,
}

impl RenderTree {
    /// Number of items placed in the body.
    pub fn item_count(&self) -> usize {
        match &self.body {
            Body::Single(_) => 1,
            Body::List(list) => list.columns.iter().map(|c| c.entries.len()).sum(),
        }
    }

    /// Whether the body uses the multi-item arrangement.
    pub fn is_list(&self) -> bool {
        matches!(self.body, Body::List(_))
    }
}

/// Canvas geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    /// Ratio to the 1080 px reference width
    pub scale: f64,
    /// Inner padding on every side
    pub padding_px: u32,
}

/// Base direction of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

/// Background layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Background {
    pub palette: Palette,
    pub decorations: Decorations,
}

/// A run of text at a resolved size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub text: String,
    pub font_px: u32,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, font_px: u32) -> Self {
        Self {
            text: text.into(),
            font_px,
        }
    }
}

/// Header arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Title and badge together in a centered pill
    Pill,
    /// Title on one side, badge on the other
    Split,
}

/// Title row with the optional count badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub style: HeaderStyle,
    pub title: TextBlock,
    /// Count label, shown as "× label"
    pub badge: Option<TextBlock>,
}

/// Main content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Body {
    /// One item with autosized text
    Single(SingleBody),
    /// Several items in columns at a uniform size
    List(ListBody),
}

/// Single-item arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    /// Main text inside a bordered card
    Frame,
    /// Plain main text under a split header
    Split,
    /// Main text with the detail block stacked below
    Stack,
    /// Plain main text
    Center,
}

/// Body of a single-item story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleBody {
    pub arrangement: Arrangement,
    pub text: TextBlock,
    pub line_height: f64,
    /// Benefit/description block under the text (stack only)
    pub detail: Option<DetailBlock>,
}

/// Benefit and count description grouped in one block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailBlock {
    pub font_px: u32,
    pub benefit: Option<String>,
    pub count_description: Option<String>,
}

/// Body of a multi-item story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListBody {
    pub font_px: u32,
    pub line_height: f64,
    pub columns: Vec<Column>,
}

/// One column of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Column {
    pub entries: Vec<ListEntry>,
}

/// One item in a multi-item story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    /// Position in the rendered item list
    pub position: usize,
    pub text: String,
    pub badge: Option<String>,
    pub benefit: Option<String>,
    pub count_description: Option<String>,
}

/// Bottom row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Footer {
    pub watermark: Option<TextBlock>,
    pub benefit: Option<TextBlock>,
    pub count_description: Option<TextBlock>,
}
