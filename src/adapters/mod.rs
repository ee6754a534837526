// Adapters layer: concrete implementations of the domain ports (terminal, file log, rand).

pub mod console;
pub mod random;
pub mod storage;
