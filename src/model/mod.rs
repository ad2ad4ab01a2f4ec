//! Content model types.
//!
//! Items and sections are created once by the loader and treated as
//! read-only afterwards; every selection and layout call borrows them.

mod item;
mod section;

pub use item::{ContentItem, Count};
pub use section::{Library, Section};
