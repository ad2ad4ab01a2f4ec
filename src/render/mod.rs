//! Output adapters for render trees.
//!
//! Pixels are painted by an external renderer; these adapters serialize the
//! tree for one (JSON) or describe it for people (plain text).

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;
