use crate::domain::model::WordList;
use crate::domain::ports::Console;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Forces the first character to uppercase and leaves the rest exactly as read.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strips and capitalizes every line, skipping lines that are blank after stripping.
pub fn parse_words<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        words.push(capitalize(trimmed));
    }
    Ok(words)
}

/// Loads a word list from `path`, falling back to `defaults` when the file is
/// missing, unreadable or holds no words.
pub fn load_word_list<C: Console>(path: &Path, defaults: &WordList, console: &mut C) -> WordList {
    let parsed = File::open(path).and_then(|file| parse_words(BufReader::new(file)));

    match parsed {
        Ok(words) => match WordList::new(words) {
            Ok(list) => {
                tracing::debug!("Loaded {} words from {}", list.len(), path.display());
                list
            }
            Err(_) => {
                tracing::warn!("{} contains no words, using defaults", path.display());
                console.notify(&format!(
                    "Warning: {} has no words. Using default list.",
                    path.display()
                ));
                defaults.clone()
            }
        },
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            console.notify(&format!(
                "Warning: {} not found. Using default list.",
                path.display()
            ));
            defaults.clone()
        }
    }
}
