use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};

pub const ADJECTIVES_FILE: &str = "adjectives.txt";
pub const NOUNS_FILE: &str = "nouns.txt";
pub const OUTPUT_FILE: &str = "usernames.txt";

/// File locations used by one run. Paths are relative to the working directory by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub adjectives_path: PathBuf,
    pub nouns_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            adjectives_path: PathBuf::from(ADJECTIVES_FILE),
            nouns_path: PathBuf::from(NOUNS_FILE),
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl AppConfig {
    /// Roots all three files under `base`.
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            adjectives_path: base.join(ADJECTIVES_FILE),
            nouns_path: base.join(NOUNS_FILE),
            output_path: base.join(OUTPUT_FILE),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("adjectives_path", &self.adjectives_path.to_string_lossy())?;
        validate_path("nouns_path", &self.nouns_path.to_string_lossy())?;
        validate_path("output_path", &self.output_path.to_string_lossy())?;
        Ok(())
    }
}
