//! Layout engine: font sizing, column partitioning and template dispatch.
//!
//! Everything here is a pure function of its inputs. The engine consumes a
//! [`Design`](crate::design::Design), the selected items and a
//! [`DisplayOptions`] snapshot, and returns a fresh [`RenderTree`].

mod columns;
mod engine;
mod options;
mod sizing;
mod tree;

pub use columns::partition_columns;
pub use engine::{compute_layout, LayoutEngine};
pub use options::{DisplayOptions, DEFAULT_WATERMARK, MAX_COLUMNS, MIN_COLUMNS};
pub use sizing::{
    canvas_height, list_font_px, list_line_height, main_font_px, scale_for, REFERENCE_HEIGHT,
    REFERENCE_WIDTH,
};
pub use tree::{
    Arrangement, Background, Body, Canvas, Column, DetailBlock, Footer, Header, HeaderStyle,
    ListBody, ListEntry, RenderTree, SingleBody, TextBlock, TextDirection,
};
