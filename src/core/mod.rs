pub mod engine;
pub mod generator;
pub mod input;
pub mod words;

pub use crate::domain::model::{BatchRequest, GenerationOptions, WordList};
pub use crate::domain::ports::{Console, RandomSource, Storage};
pub use crate::utils::error::Result;
