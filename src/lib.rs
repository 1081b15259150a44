// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, histogram_from_stream, report_from_stdin, run};
pub use config::ReportConfig;
pub use crate::core::{Histogram, chunks_from, decode_chunk, stdin_chunks};
pub use models::{DefaultMap, ReportEntry};
