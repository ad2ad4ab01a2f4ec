//! Loading content libraries from disk.

use std::fs;
use std::path::PathBuf;

use azkar_story::{
    compose_story, load_file, load_first, DisplayOptions, Error, LibraryLoader, LoadOptions,
    StoryRequest,
};
use tempfile::TempDir;

const DATA: &str = r#"{
    "sections": [
        {
            "id": "morning",
            "title": "أذكار الصباح",
            "content": [
                { "text": "أصبحنا وأصبح الملك لله", "count": 1 },
                { "text": "سبحان الله وبحمده", "count": 100, "count_description": "مائة مرة" },
                { "text": "اللهم بك أصبحنا", "benefit": "" }
            ]
        },
        {
            "id": "evening",
            "title": "أذكار المساء",
            "content": [{ "text": "أمسينا وأمسى الملك لله" }]
        }
    ]
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "azkar.json", DATA);

    let library = load_file(&path).unwrap();
    assert_eq!(library.sections.len(), 2);
    assert_eq!(library.item_count(), 4);
    assert_eq!(library.section("evening").unwrap().title, "أذكار المساء");

    let third = &library.section("morning").unwrap().content[2];
    assert_eq!(third.benefit_text(), None);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = load_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_load_first_falls_back() {
    let dir = TempDir::new().unwrap();
    let broken = write(&dir, "broken.json", "{ not json");
    let wrong_shape = write(&dir, "wrong.json", r#"{"items": []}"#);
    let good = write(&dir, "azkar.json", DATA);
    let missing = dir.path().join("missing.json");

    let library = load_first(&[missing, broken, wrong_shape, good]).unwrap();
    assert_eq!(library.sections[0].id, "morning");
}

#[test]
fn test_load_first_returns_last_error() {
    let dir = TempDir::new().unwrap();
    let broken = write(&dir, "broken.json", "{ not json");
    let wrong_shape = write(&dir, "wrong.json", r#"{"items": []}"#);

    let result = load_first(&[broken, wrong_shape]);
    assert!(matches!(result, Err(Error::Schema(_))));

    let none: [PathBuf; 0] = [];
    assert!(load_first(&none).is_err());
}

#[test]
fn test_strict_file_load() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "azkar.json",
        r#"{"sections":[{"id":"a","content":[{"text":"x","benefit":["list"]}]}]}"#,
    );

    let strict = LibraryLoader::with_options(LoadOptions::new().strict());
    assert!(matches!(strict.load_file(&path), Err(Error::Schema(_))));

    let lenient = LibraryLoader::new().load_file(&path).unwrap();
    assert!(lenient.sections[0].content[0].benefit.is_none());
}

#[test]
fn test_story_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "azkar.json", DATA);
    let library = load_file(&path).unwrap();

    let request = StoryRequest::new(0x1234).with_section("morning").with_group(3);
    let story = compose_story(&library, &request, &DisplayOptions::default()).unwrap();
    assert_eq!(story.item_indices.len(), 3);
    assert!(story.tree.is_list());
    assert_eq!(story.file_stem, "أذكار-الصباح-1234");

    let request = StoryRequest::new(0x1234).with_section("evening").with_group(10);
    let story = compose_story(&library, &request, &DisplayOptions::default()).unwrap();
    assert_eq!(story.item_indices, vec![0]);
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_load_file_async() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "azkar.json", DATA);
    let library = LibraryLoader::new().load_file_async(&path).await.unwrap();
    assert_eq!(library.item_count(), 4);
}
