//! Content library loading and normalization.

mod library_loader;
mod options;

pub use library_loader::LibraryLoader;
pub use options::{ErrorMode, LoadOptions};
