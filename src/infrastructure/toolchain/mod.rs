//! Executable lookup infrastructure module

mod search_path;

pub use search_path::SearchPathLocator;
