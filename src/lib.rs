pub mod cli;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod generate;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod select;
pub mod ui;

// Re-export the pieces most callers need
pub use corpus::{Corpus, CorpusError, CorpusProvider};
pub use generate::{Generator, generate};
pub use render::Surface;
pub use select::{RandomSource, parse_count, select};
