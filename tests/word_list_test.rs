use random_username::{load_word_list, LineConsole, WordList, DEFAULT_ADJECTIVES};
use std::io::Cursor;
use tempfile::TempDir;

fn quiet_console() -> LineConsole<Cursor<&'static str>, Vec<u8>> {
    LineConsole::new(Cursor::new(""), Vec::new())
}

#[test]
fn test_missing_file_returns_defaults_and_warns() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("adjectives.txt");
    let defaults = WordList::from_defaults(&DEFAULT_ADJECTIVES);
    let mut console = quiet_console();

    let words = load_word_list(&path, &defaults, &mut console);

    assert_eq!(words, defaults);
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.starts_with("Warning: "));
    assert!(output.contains("adjectives.txt not found. Using default list."));
}

#[test]
fn test_existing_file_is_capitalized_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nouns.txt");
    std::fs::write(&path, "badger\n  otter  \n\nmcFly\nHERON\n").unwrap();
    let defaults = WordList::from_defaults(&DEFAULT_ADJECTIVES);
    let mut console = quiet_console();

    let words = load_word_list(&path, &defaults, &mut console);

    assert_eq!(words.as_slice(), ["Badger", "Otter", "McFly", "HERON"]);
    assert!(console.into_output().is_empty());
}

#[test]
fn test_blank_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nouns.txt");
    std::fs::write(&path, "\n   \n\t\n").unwrap();
    let defaults = WordList::from_defaults(&DEFAULT_ADJECTIVES);
    let mut console = quiet_console();

    let words = load_word_list(&path, &defaults, &mut console);

    assert_eq!(words, defaults);
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("has no words. Using default list."));
}

#[test]
fn test_directory_path_is_treated_as_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    let defaults = WordList::from_defaults(&DEFAULT_ADJECTIVES);
    let mut console = quiet_console();

    let words = load_word_list(temp_dir.path(), &defaults, &mut console);

    assert_eq!(words, defaults);
}
