//! Story composition: section + seed + offset → design, items and layout.

use serde::{Deserialize, Serialize};

use crate::design::{create_design_with, Design, DesignOverrides, CATALOG_VERSION};
use crate::error::Result;
use crate::layout::{compute_layout, DisplayOptions, RenderTree, REFERENCE_WIDTH};
use crate::model::{ContentItem, Library};
use crate::naming::{file_stem, seed_to_hex};
use crate::selection::{group_indices, item_index};

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryRequest {
    /// Seed driving design and item choice
    pub seed: u32,

    /// Steps forward from the seed's base item
    pub offset: usize,

    /// Section to draw from; the first section when absent or unknown
    pub section_id: Option<String>,

    /// Number of consecutive items; single-item story when absent
    pub group_size: Option<usize>,

    /// Forced template or mode
    pub overrides: DesignOverrides,

    /// Output canvas width in pixels
    pub canvas_width: u32,
}

impl StoryRequest {
    /// Request for `seed` with defaults for everything else.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Set the item offset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Set the section id.
    pub fn with_section(mut self, id: impl Into<String>) -> Self {
        self.section_id = Some(id.into());
        self
    }

    /// Render `size` consecutive items.
    pub fn with_group(mut self, size: usize) -> Self {
        self.group_size = Some(size);
        self
    }

    /// Set design overrides.
    pub fn with_overrides(mut self, overrides: DesignOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Set the canvas width.
    pub fn with_canvas_width(mut self, width: u32) -> Self {
        self.canvas_width = width;
        self
    }
}

impl Default for StoryRequest {
    fn default() -> Self {
        Self {
            seed: 0,
            offset: 0,
            section_id: None,
            group_size: None,
            overrides: DesignOverrides::default(),
            canvas_width: REFERENCE_WIDTH,
        }
    }
}

/// A composed story, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub seed: u32,
    /// Seed as it appears in file names
    pub seed_code: String,
    pub catalog_version: u32,
    pub design: Design,
    pub section_id: String,
    pub title: String,
    /// Indices of the rendered items within the section
    pub item_indices: Vec<usize>,
    pub tree: RenderTree,
    /// Suggested output file name without extension
    pub file_stem: String,
}

/// Compose a story from `library` for `request`.
pub fn compose_story(
    library: &Library,
    request: &StoryRequest,
    options: &DisplayOptions,
) -> Result<Story> {
    let section = library.section_or_first(request.section_id.as_deref())?;
    if let Some(id) = request.section_id.as_deref() {
        if id != section.id {
            log::warn!("section '{}' not found, using '{}'", id, section.id);
        }
    }

    let item_indices = match request.group_size {
        None => vec![item_index(request.seed, request.offset, section.len())?],
        Some(size) => group_indices(
            request.seed,
            request.offset,
            section.len(),
            size.min(options.effective_max_items()),
        )?,
    };
    let items: Vec<ContentItem> = item_indices
        .iter()
        .filter_map(|i| section.get(*i).cloned())
        .collect();

    let design = create_design_with(request.seed, &request.overrides);
    let tree = compute_layout(
        &design,
        &section.title,
        &items,
        options,
        request.canvas_width,
    )?;

    Ok(Story {
        seed: request.seed,
        seed_code: seed_to_hex(request.seed),
        catalog_version: CATALOG_VERSION,
        design,
        section_id: section.id.clone(),
        title: section.title.clone(),
        item_indices,
        tree,
        file_stem: file_stem(&section.title, request.seed),
    })
}
