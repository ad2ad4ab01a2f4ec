//! # azkar-story
//!
//! Deterministic story-image layout for remembrance texts.
//!
//! A 32-bit seed selects a visual design (template, palette, font,
//! decorations) and an item from a content section. The layout engine turns
//! design, items and display options into a [`RenderTree`] that any renderer
//! can paint. The same seed always produces the same design and layout.
//!
//! ## Quick Start
//!
//! ```no_run
//! use azkar_story::{compose_story, load_file, render, DisplayOptions, StoryRequest};
//!
//! fn main() -> azkar_story::Result<()> {
//!     let library = load_file("azkar.json")?;
//!
//!     let request = StoryRequest::new(0x1234).with_section("morning");
//!     let story = compose_story(&library, &request, &DisplayOptions::default())?;
//!
//!     println!("{}", render::to_text(&story.tree));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Bit-exact designs**: seeds map to the same design across releases of
//!   a catalog version
//! - **Autosized layouts**: single-item arrangements and multi-column lists
//! - **Lenient loading**: malformed sections and items are skipped
//! - **Parallel batches**: many designs at once with Rayon

pub mod design;
pub mod error;
pub mod layout;
pub mod loader;
pub mod model;
pub mod naming;
pub mod render;
pub mod selection;
pub mod story;

// Re-export commonly used types
pub use design::{
    create_design, create_design_with, random_seed, Design, DesignOverrides, FontFamily, Mode,
    Palette, StoryRng, Template, CATALOG_VERSION,
};
pub use error::{Error, Result};
pub use layout::{compute_layout, DisplayOptions, RenderTree};
pub use loader::{ErrorMode, LibraryLoader, LoadOptions};
pub use model::{ContentItem, Count, Library, Section};
pub use naming::{file_stem, parse_seed, safe_slug, seed_from_file_name};
pub use render::JsonFormat;
pub use selection::{group_indices, item_index};
pub use story::{compose_story, Story, StoryRequest};

use std::path::Path;

/// Load a content library from a JSON file.
///
/// # Example
///
/// ```no_run
/// let library = azkar_story::load_file("azkar.json").unwrap();
/// println!("Sections: {}", library.sections.len());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Library> {
    LibraryLoader::new().load_file(path)
}

/// Load a content library from a JSON string.
pub fn load_str(json: &str) -> Result<Library> {
    LibraryLoader::new().load_str(json)
}

/// Load the first readable library from `paths`, in order.
pub fn load_first<P: AsRef<Path>>(paths: &[P]) -> Result<Library> {
    LibraryLoader::new().load_first(paths)
}

/// Recreate the design of a previously saved story from its file name.
///
/// # Example
///
/// ```
/// let design = azkar_story::design_for_file_name("أذكار-الصباح-1234.png").unwrap();
/// assert_eq!(design, azkar_story::create_design(0x1234));
/// ```
pub fn design_for_file_name(name: &str) -> Result<Design> {
    Ok(create_design(seed_from_file_name(name)?))
}

/// Compute designs for many seeds in parallel, in input order.
pub fn generate_designs(seeds: &[u32]) -> Vec<Design> {
    design::create_designs(seeds)
}

/// Builder for loading a library and composing stories from it.
///
/// # Example
///
/// ```no_run
/// use azkar_story::{Azkar, StoryRequest};
///
/// let story = Azkar::new()
///     .strict()
///     .with_columns(2)
///     .with_watermark(false)
///     .load("azkar.json")?
///     .compose(&StoryRequest::new(42).with_group(4))?;
/// # Ok::<(), azkar_story::Error>(())
/// ```
pub struct Azkar {
    load_options: LoadOptions,
    display_options: DisplayOptions,
}

impl Azkar {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            load_options: LoadOptions::default(),
            display_options: DisplayOptions::default(),
        }
    }

    /// Fail on the first malformed section or item.
    pub fn strict(mut self) -> Self {
        self.load_options = self.load_options.strict();
        self
    }

    /// Keep text exactly as stored in the file.
    pub fn raw_text(mut self) -> Self {
        self.load_options = self.load_options.with_normalize_text(false);
        self
    }

    /// Replace all display options.
    pub fn with_display_options(mut self, options: DisplayOptions) -> Self {
        self.display_options = options;
        self
    }

    /// Set the number of list columns.
    pub fn with_columns(mut self, columns: u8) -> Self {
        self.display_options = self.display_options.with_columns(columns);
        self
    }

    /// Show or hide the watermark.
    pub fn with_watermark(mut self, show: bool) -> Self {
        self.display_options = self.display_options.with_watermark(show);
        self
    }

    /// Load a library file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<AzkarLibrary> {
        let library = LibraryLoader::with_options(self.load_options).load_file(path)?;
        Ok(AzkarLibrary {
            library,
            display_options: self.display_options,
        })
    }

    /// Load a library from a JSON string.
    pub fn load_str(self, json: &str) -> Result<AzkarLibrary> {
        let library = LibraryLoader::with_options(self.load_options).load_str(json)?;
        Ok(AzkarLibrary {
            library,
            display_options: self.display_options,
        })
    }
}

impl Default for Azkar {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded library with the display options to compose it with.
pub struct AzkarLibrary {
    /// The loaded content
    pub library: Library,
    display_options: DisplayOptions,
}

impl AzkarLibrary {
    /// Compose one story.
    pub fn compose(&self, request: &StoryRequest) -> Result<Story> {
        compose_story(&self.library, request, &self.display_options)
    }

    /// Compose a story and serialize it to JSON.
    pub fn to_json(&self, request: &StoryRequest, format: JsonFormat) -> Result<String> {
        render::to_json(&self.compose(request)?, format)
    }

    /// Compose a story and describe its layout as plain text.
    pub fn to_text(&self, request: &StoryRequest) -> Result<String> {
        Ok(render::to_text(&self.compose(request)?.tree))
    }

    /// Display options in effect.
    pub fn display_options(&self) -> &DisplayOptions {
        &self.display_options
    }

    /// Get the library.
    pub fn library(&self) -> &Library {
        &self.library
    }
}
