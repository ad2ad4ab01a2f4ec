//! Seed codes and output file names.
//!
//! A generated image is saved as `<slug>-<seed hex>`, so its design can be
//! reproduced from the file name alone.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Slug used when a title has no usable characters.
pub const FALLBACK_SLUG: &str = "azkar";

fn separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[\\s\u{200f}\u{200e}]+").unwrap())
}

fn disallowed_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N}\-_.]+").unwrap())
}

fn dash_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").unwrap())
}

/// File-name-safe form of a title.
///
/// Whitespace and direction marks become dashes; anything other than
/// letters, digits, `-`, `_` and `.` is dropped.
pub fn safe_slug(input: &str) -> String {
    let s = separator_regex().replace_all(input.trim(), "-");
    let s = disallowed_regex().replace_all(&s, "");
    let s = dash_run_regex().replace_all(&s, "-");
    let s = s.trim_matches('-');

    if s.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        s.to_string()
    }
}

/// Seed as lowercase hex without padding.
pub fn seed_to_hex(seed: u32) -> String {
    format!("{:x}", seed)
}

/// Parse a hex seed code, with or without a `0x` prefix.
pub fn parse_seed(code: &str) -> Result<u32> {
    let code = code.trim();
    let digits = code
        .strip_prefix("0x")
        .or_else(|| code.strip_prefix("0X"))
        .unwrap_or(code);
    if digits.is_empty() {
        return Err(Error::InvalidSeed(code.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidSeed(code.to_string()))
}

/// File stem for a story: `<slug>-<seed hex>`.
pub fn file_stem(title: &str, seed: u32) -> String {
    format!("{}-{}", safe_slug(title), seed_to_hex(seed))
}

/// Recover the seed from a file name produced by [`file_stem`].
pub fn seed_from_file_name(name: &str) -> Result<u32> {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    let (_, code) = stem
        .rsplit_once('-')
        .ok_or_else(|| Error::InvalidSeed(name.to_string()))?;
    parse_seed(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_slug() {
        assert_eq!(safe_slug("أذكار الصباح"), "أذكار-الصباح");
        assert_eq!(safe_slug("  Morning  Adhkar! "), "Morning-Adhkar");
        assert_eq!(safe_slug("a\u{200f}b"), "a-b");
        assert_eq!(safe_slug("--x--y--"), "x-y");
        assert_eq!(safe_slug("v1.2_final"), "v1.2_final");
    }

    #[test]
    fn test_safe_slug_fallback() {
        assert_eq!(safe_slug(""), "azkar");
        assert_eq!(safe_slug("!!! ???"), "azkar");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Evening", 0x1234), "Evening-1234");
        assert_eq!(file_stem("", u32::MAX), "azkar-ffffffff");
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("1234").unwrap(), 0x1234);
        assert_eq!(parse_seed("0xDEADBEEF").unwrap(), 0xdead_beef);
        assert!(matches!(parse_seed("xyz"), Err(Error::InvalidSeed(_))));
        assert!(parse_seed("").is_err());
        assert!(parse_seed("1ffffffff").is_err());
    }

    #[test]
    fn test_seed_from_file_name() {
        assert_eq!(seed_from_file_name("أذكار-الصباح-2a.png").unwrap(), 0x2a);
        assert_eq!(seed_from_file_name("azkar-ffffffff").unwrap(), u32::MAX);
        assert!(seed_from_file_name("noseed.png").is_err());
    }

    #[test]
    fn test_stem_roundtrip() {
        let name = format!("{}.jpg", file_stem("Sleep adhkar", 0xbeef));
        assert_eq!(seed_from_file_name(&name).unwrap(), 0xbeef);
    }
}
