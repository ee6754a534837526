use crate::utils::error::Result;

/// Source of uniform random draws used by the generator.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn int_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    fn coin(&mut self) -> bool {
        self.int_in_range(0, 1) == 1
    }
}

/// Line-oriented terminal collaborator.
pub trait Console {
    /// Shows `prompt` and reads one line. `Ok(None)` means end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;

    fn say(&mut self, message: &str) -> Result<()>;

    /// Fire-and-forget message; a broken terminal is not worth failing over.
    fn notify(&mut self, message: &str) {
        if let Err(e) = self.say(message) {
            tracing::debug!("Console message dropped: {}", e);
        }
    }
}

/// Destination for finished batches.
pub trait Storage {
    fn append_usernames(&self, usernames: &[String]) -> Result<()>;

    /// Human-readable location, used in the save confirmation.
    fn location(&self) -> String;
}
