// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use futures::executor::block_on;
use futures::{Stream, StreamExt as _};
use log::{debug, info};
use std::io;

use crate::core::{Histogram, stdin_chunks};

/// Prints a letter frequency histogram of standard input.
///
/// Whitespace is ignored and letters are counted case-insensitively.
/// Characters making up less than 1% of the input are left out.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {}

/// Builds a histogram from `chunks`, applying them in arrival order.
///
/// # Errors
///
/// Returns the first read error delivered by the stream.
pub async fn histogram_from_stream<S>(mut chunks: S) -> Result<Histogram>
where
    S: Stream<Item = io::Result<String>> + Unpin,
{
    let mut histogram = Histogram::new();
    let mut received: usize = 0;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.context("Failed to read from standard input")?;
        received = received.saturating_add(1);
        debug!("chunk {received}: {} bytes", chunk.len());
        histogram.add(&chunk);
    }

    info!(
        "read {received} chunks, {} letters, {} distinct",
        histogram.total_letters(),
        histogram.distinct()
    );
    Ok(histogram)
}

/// Reads standard input to end of stream and returns the rendered report.
///
/// # Errors
///
/// Fails if standard input cannot be read.
pub fn report_from_stdin() -> Result<String> {
    let histogram = block_on(histogram_from_stream(stdin_chunks()))?;
    Ok(histogram.render())
}

/// # Errors
///
/// Fails if standard input cannot be read; nothing is printed in that case.
pub fn run(_args: Args) -> Result<()> {
    let report = report_from_stdin()?;
    println!("{report}");
    Ok(())
}
