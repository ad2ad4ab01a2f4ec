//! Content item types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Repetition count attached to an item, either numeric or a free-form label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    /// Numeric count (e.g. `3`)
    Number(f64),
    /// Free-form label (e.g. `"3"` or `"100 مرة"`)
    Text(String),
}

impl Count {
    /// Display label for the count, or `None` when it renders as nothing.
    ///
    /// Numbers print without a trailing `.0`; labels are trimmed and a
    /// blank label counts as absent.
    pub fn label(&self) -> Option<String> {
        match self {
            Count::Number(n) => {
                if !n.is_finite() {
                    None
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(format!("{}", n))
                }
            }
            Count::Text(s) => non_blank(s).map(str::to_string),
        }
    }
}

impl From<u32> for Count {
    fn from(n: u32) -> Self {
        Count::Number(f64::from(n))
    }
}

impl From<&str> for Count {
    fn from(s: &str) -> Self {
        Count::Text(s.to_string())
    }
}

impl From<String> for Count {
    fn from(s: String) -> Self {
        Count::Text(s)
    }
}

/// One quotable unit of text with optional supplementary fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Main text, never blank once loaded
    pub text: String,

    /// Benefit / virtue note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,

    /// Repetition count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Count>,

    /// Free-form description of the repetition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_description: Option<String>,
}

impl ContentItem {
    /// Create an item with just a text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            benefit: None,
            count: None,
            count_description: None,
        }
    }

    /// Set the benefit note.
    pub fn with_benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefit = Some(benefit.into());
        self
    }

    /// Set the repetition count.
    pub fn with_count(mut self, count: impl Into<Count>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Set the repetition description.
    pub fn with_count_description(mut self, description: impl Into<String>) -> Self {
        self.count_description = Some(description.into());
        self
    }

    /// Text length in characters, as used by the font-size heuristic.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Normalized count label.
    pub fn count_label(&self) -> Option<String> {
        self.count.as_ref().and_then(Count::label)
    }

    /// Benefit note, if present and not blank.
    pub fn benefit_text(&self) -> Option<&str> {
        self.benefit.as_deref().and_then(non_blank)
    }

    /// Repetition description, if present and not blank.
    pub fn count_description_text(&self) -> Option<&str> {
        self.count_description.as_deref().and_then(non_blank)
    }

    /// Whether the item satisfies the non-blank text invariant.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label_number_and_text() {
        assert_eq!(Count::Number(3.0).label(), Some("3".to_string()));
        assert_eq!(Count::from("3").label(), Some("3".to_string()));
        assert_eq!(Count::from("  7 ").label(), Some("7".to_string()));
        assert_eq!(Count::Number(2.5).label(), Some("2.5".to_string()));
    }

    #[test]
    fn test_count_label_blank_is_absent() {
        assert_eq!(Count::from("").label(), None);
        assert_eq!(Count::from("   ").label(), None);
        assert_eq!(ContentItem::new("x").count_label(), None);
    }

    #[test]
    fn test_optional_fields_blank() {
        let item = ContentItem::new("سبحان الله")
            .with_benefit("  ")
            .with_count_description(" مرة واحدة ");
        assert_eq!(item.benefit_text(), None);
        assert_eq!(item.count_description_text(), Some("مرة واحدة"));
    }

    #[test]
    fn test_text_len_counts_chars() {
        let item = ContentItem::new("الحمد");
        assert_eq!(item.text_len(), 5);
        // characters, not UTF-16 units or bytes
        assert_eq!(ContentItem::new("ﷺ 🌙").text_len(), 3);
        assert!(item.is_valid());
        assert!(!ContentItem::new(" \n").is_valid());
    }

    #[test]
    fn test_count_deserialize_untagged() {
        let item: ContentItem =
            serde_json::from_str(r#"{"text":"a","count":3,"count_description":"d"}"#).unwrap();
        assert_eq!(item.count, Some(Count::Number(3.0)));

        let item: ContentItem = serde_json::from_str(r#"{"text":"a","count":"3"}"#).unwrap();
        assert_eq!(item.count_label(), Some("3".to_string()));
    }
}
