pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{console::LineConsole, random::RngSource, storage::LocalStorage};
pub use config::AppConfig;
pub use crate::core::{
    engine::{BatchReport, UsernameEngine},
    generator::{generate, generate_batch, UsernameGenerator},
    words::{capitalize, load_word_list},
};
pub use domain::model::{
    BatchRequest, GenerationOptions, WordList, DEFAULT_ADJECTIVES, DEFAULT_NOUNS, SPECIAL_CHARS,
};
pub use utils::error::{Result, UsernameError};
pub use utils::validation::{parse_min_length, parse_positive_int, parse_yes_no};
