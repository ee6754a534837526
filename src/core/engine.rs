use crate::core::generator::UsernameGenerator;
use crate::core::input::collect_request;
use crate::domain::model::BatchRequest;
use crate::domain::ports::{Console, RandomSource, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Outcome of one interactive run. `saved` is false when the log could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub usernames: Vec<String>,
    pub saved: bool,
}

pub struct UsernameEngine<S: Storage> {
    generator: UsernameGenerator,
    storage: S,
}

impl<S: Storage> UsernameEngine<S> {
    pub fn new(generator: UsernameGenerator, storage: S) -> Self {
        Self { generator, storage }
    }

    /// Prompt, generate, display, save.
    pub fn run<C: Console, R: RandomSource>(&self, console: &mut C, rng: &mut R) -> Result<BatchReport> {
        console.say("=== Random Username Generator ===")?;
        let request = collect_request(console)?;
        self.run_request(&request, console, rng)
    }

    /// Same as `run` with the answers already known.
    pub fn run_request<C: Console, R: RandomSource>(
        &self,
        request: &BatchRequest,
        console: &mut C,
        rng: &mut R,
    ) -> Result<BatchReport> {
        request.validate()?;

        tracing::info!(
            "Generating {} usernames (numbers: {}, specials: {}, min length: {:?})",
            request.count,
            request.options.include_numbers,
            request.options.include_specials,
            request.options.min_length
        );
        let usernames = self
            .generator
            .generate_batch(request.count, &request.options, rng);

        console.say("\nGenerated Usernames:")?;
        for (idx, name) in usernames.iter().enumerate() {
            console.say(&format!("{}. {}", idx + 1, name))?;
        }

        let saved = self.save(&usernames, console);
        Ok(BatchReport { usernames, saved })
    }

    // A failed save is reported and swallowed; the batch is already on screen.
    fn save<C: Console>(&self, usernames: &[String], console: &mut C) -> bool {
        match self.storage.append_usernames(usernames) {
            Ok(()) => {
                tracing::info!("Saved {} usernames to {}", usernames.len(), self.storage.location());
                console.notify(&format!(
                    "\nSaved {} usernames to '{}'",
                    usernames.len(),
                    self.storage.location()
                ));
                true
            }
            Err(e) => {
                tracing::error!("Failed to save usernames to {}: {}", self.storage.location(), e);
                console.notify(&format!("\nError saving usernames: {}", e));
                false
            }
        }
    }
}
