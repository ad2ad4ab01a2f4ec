//! Content library loader.
//!
//! Accepts the `{ "sections": [ { "id", "title", "content": [ ... ] } ] }`
//! JSON shape and normalizes it into a [`Library`] whose sections and items
//! all satisfy the model invariants.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::{ContentItem, Count, Library, Section};

use super::options::{ErrorMode, LoadOptions};

/// Content library loader.
#[derive(Debug, Clone, Default)]
pub struct LibraryLoader {
    options: LoadOptions,
}

impl LibraryLoader {
    /// Create a loader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom options.
    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Load a library from a JSON string.
    pub fn load_str(&self, json: &str) -> Result<Library> {
        let raw: Value = serde_json::from_str(json)?;
        self.load_value(&raw)
    }

    /// Load a library from JSON bytes.
    pub fn load_slice(&self, data: &[u8]) -> Result<Library> {
        let raw: Value = serde_json::from_slice(data)?;
        self.load_value(&raw)
    }

    /// Load a library from a reader.
    pub fn load_reader<R: Read>(&self, mut reader: R) -> Result<Library> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.load_slice(&data)
    }

    /// Load a library from a file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Library> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        self.load_slice(&data)
    }

    /// Load a library from a file without blocking the async runtime.
    #[cfg(feature = "async")]
    pub async fn load_file_async<P: AsRef<Path>>(&self, path: P) -> Result<Library> {
        let data = tokio::fs::read(path.as_ref()).await?;
        self.load_slice(&data)
    }

    /// Try each source in order and return the first library that loads.
    ///
    /// When every source fails, the error of the last one is returned.
    pub fn load_first<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Library> {
        let mut last_error = None;
        for path in paths {
            match self.load_file(path) {
                Ok(library) => return Ok(library),
                Err(e) => {
                    log::warn!("failed to load {}: {}", path.as_ref().display(), e);
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| Error::Other("no content sources given".to_string())))
    }

    /// Normalize an already-parsed JSON value.
    pub fn load_value(&self, raw: &Value) -> Result<Library> {
        let sections = raw
            .as_object()
            .and_then(|root| root.get("sections"))
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Schema("Unexpected ATHAR JSON schema".to_string()))?;

        let mut library = Library::default();
        for (index, raw_section) in sections.iter().enumerate() {
            if let Some(section) = self.section(index, raw_section)? {
                library.sections.push(section);
            }
        }

        if library.is_empty() {
            return Err(Error::Schema(
                "ATHAR JSON loaded but no sections found".to_string(),
            ));
        }

        log::debug!(
            "loaded {} sections with {} items",
            library.sections.len(),
            library.item_count()
        );
        Ok(library)
    }

    fn section(&self, index: usize, raw: &Value) -> Result<Option<Section>> {
        let Some(obj) = raw.as_object() else {
            return self.reject(format!("section {} is not an object", index));
        };

        let id = self.string_field(obj, "id")?.unwrap_or_default();
        let title = self
            .string_field(obj, "title")?
            .unwrap_or_else(|| id.clone());

        let raw_items = match obj.get("content") {
            Some(Value::Array(items)) => items.as_slice(),
            None => &[][..],
            Some(_) => return self.reject(format!("section '{}' content is not an array", id)),
        };

        let mut content = Vec::with_capacity(raw_items.len());
        for (item_index, raw_item) in raw_items.iter().enumerate() {
            if let Some(item) = self.item(&id, item_index, raw_item)? {
                content.push(item);
            }
        }

        if id.is_empty() {
            return self.reject(format!("section {} has no id", index));
        }
        if content.is_empty() {
            return self.reject(format!("section '{}' has no valid items", id));
        }

        Ok(Some(Section { id, title, content }))
    }

    fn item(&self, section_id: &str, index: usize, raw: &Value) -> Result<Option<ContentItem>> {
        let Some(obj) = raw.as_object() else {
            return self.reject(format!("item {} in '{}' is not an object", index, section_id));
        };

        let text = self.string_field(obj, "text")?.unwrap_or_default();
        if text.trim().is_empty() {
            return self.reject(format!("item {} in '{}' has no text", index, section_id));
        }

        let count = match obj.get("count") {
            Some(Value::Number(n)) => n.as_f64().map(Count::Number),
            Some(Value::String(s)) => Some(Count::Text(self.clean(s))),
            None | Some(Value::Null) => None,
            Some(_) if self.options.error_mode == ErrorMode::Strict => {
                return Err(Error::Schema(format!(
                    "item {} in '{}' has a non-scalar count",
                    index, section_id
                )));
            }
            Some(_) => None,
        };

        Ok(Some(ContentItem {
            text,
            benefit: self.string_field(obj, "benefit")?,
            count,
            count_description: self.string_field(obj, "count_description")?,
        }))
    }

    /// Read an optional string field. Wrong types are absent in lenient mode.
    fn string_field(&self, obj: &Map<String, Value>, key: &str) -> Result<Option<String>> {
        match obj.get(key) {
            Some(Value::String(s)) => Ok(Some(self.clean(s))),
            None | Some(Value::Null) => Ok(None),
            Some(_) if self.options.error_mode == ErrorMode::Strict => {
                Err(Error::Schema(format!("field '{}' is not a string", key)))
            }
            Some(_) => Ok(None),
        }
    }

    fn reject<T>(&self, reason: String) -> Result<Option<T>> {
        match self.options.error_mode {
            ErrorMode::Strict => Err(Error::Schema(reason)),
            ErrorMode::Lenient => {
                log::debug!("skipping: {}", reason);
                Ok(None)
            }
        }
    }

    fn clean(&self, s: &str) -> String {
        if self.options.normalize_text {
            s.replace("\r\n", "\n").nfc().collect()
        } else {
            s.to_string()
        }
    }
}
