use crate::domain::model::{GenerationOptions, WordList, SPECIAL_CHARS};
use crate::domain::ports::RandomSource;

/// Owns the two loaded word lists for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct UsernameGenerator {
    adjectives: WordList,
    nouns: WordList,
}

impl UsernameGenerator {
    pub fn new(adjectives: WordList, nouns: WordList) -> Self {
        Self { adjectives, nouns }
    }

    pub fn adjectives(&self) -> &WordList {
        &self.adjectives
    }

    pub fn nouns(&self) -> &WordList {
        &self.nouns
    }

    pub fn generate<R: RandomSource>(&self, options: &GenerationOptions, rng: &mut R) -> String {
        generate(options, &self.adjectives, &self.nouns, rng)
    }

    pub fn generate_batch<R: RandomSource>(
        &self,
        count: usize,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Vec<String> {
        generate_batch(count, options, &self.adjectives, &self.nouns, rng)
    }
}

/// Builds one username: adjective + noun, then the optional decorations and padding.
pub fn generate<R: RandomSource>(
    options: &GenerationOptions,
    adjectives: &WordList,
    nouns: &WordList,
    rng: &mut R,
) -> String {
    let adjective = rng.choose(adjectives.as_slice());
    let noun = rng.choose(nouns.as_slice());

    let mut username = String::with_capacity(adjective.len() + noun.len() + 8);
    username.push_str(adjective);
    username.push_str(noun);

    if options.include_numbers {
        username.push_str(&rng.int_in_range(0, 999).to_string());
    }

    if options.include_specials {
        username.push(*rng.choose(&SPECIAL_CHARS));
    }

    if let Some(min_length) = options.min_length {
        pad_to_length(&mut username, min_length, options, rng);
    }

    username
}

fn pad_to_length<R: RandomSource>(
    username: &mut String,
    min_length: usize,
    options: &GenerationOptions,
    rng: &mut R,
) {
    if !options.can_pad() {
        return;
    }

    let mut length = username.chars().count();
    while length < min_length {
        let use_digit = match (options.include_numbers, options.include_specials) {
            (true, true) => !rng.coin(),
            (true, false) => true,
            _ => false,
        };

        if use_digit {
            username.push(random_digit(rng));
        } else {
            username.push(*rng.choose(&SPECIAL_CHARS));
        }
        length += 1;
    }
}

fn random_digit<R: RandomSource>(rng: &mut R) -> char {
    char::from_digit(rng.int_in_range(0, 9), 10).unwrap_or('0')
}

/// Generates `count` usernames in index order against the same word lists.
pub fn generate_batch<R: RandomSource>(
    count: usize,
    options: &GenerationOptions,
    adjectives: &WordList,
    nouns: &WordList,
    rng: &mut R,
) -> Vec<String> {
    let usernames: Vec<String> = (0..count)
        .map(|_| generate(options, adjectives, nouns, rng))
        .collect();
    tracing::debug!("Generated batch of {} usernames", usernames.len());
    usernames
}
