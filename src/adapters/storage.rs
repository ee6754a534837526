use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Append-only plain-text log, one username per line.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for LocalStorage {
    fn append_usernames(&self, usernames: &[String]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        for name in usernames {
            writeln!(writer, "{}", name)?;
        }
        writer.flush()?;

        tracing::debug!("Appended {} usernames to {}", usernames.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
