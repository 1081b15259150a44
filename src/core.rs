// src/core.rs
pub mod histogram;
pub mod reader;

pub use histogram::Histogram;
pub use reader::{ChunkStream, chunks_from, decode_chunk, stdin_chunks};
