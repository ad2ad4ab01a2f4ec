//! Section and library types.

use super::ContentItem;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A named, ordered collection of content items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Items in source order
    pub content: Vec<ContentItem>,
}

impl Section {
    /// Create a section.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: Vec<ContentItem>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the section has no items.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get an item by index.
    pub fn get(&self, index: usize) -> Option<&ContentItem> {
        self.content.get(index)
    }
}

/// The full content collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    /// Sections in source order
    pub sections: Vec<Section>,
}

impl Library {
    /// Create a library from sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Find a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Find a section by id, falling back to the first section.
    ///
    /// `None` as id always yields the first section.
    pub fn section_or_first(&self, id: Option<&str>) -> Result<&Section> {
        id.and_then(|id| self.section(id))
            .or_else(|| self.sections.first())
            .ok_or(Error::EmptyInput("library"))
    }

    /// Find a section by id, failing when it is absent.
    pub fn require_section(&self, id: &str) -> Result<&Section> {
        self.section(id)
            .ok_or_else(|| Error::SectionNotFound(id.to_string()))
    }

    /// Whether the library has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total item count across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }
}
