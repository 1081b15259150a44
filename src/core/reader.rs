// src/core/reader.rs
use encoding_rs::{CoderResult, Decoder, UTF_8};
use futures::SinkExt as _;
use futures::channel::mpsc;
use futures::executor::block_on;
use log::{debug, trace};
use std::io::{self, ErrorKind, Read};
use std::thread;

/// Bytes requested from the source per read.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Decoded chunks buffered between the reader thread and the consumer.
const QUEUE_DEPTH: usize = 4;

/// Text chunks in the order they were read; ends at end of stream.
pub type ChunkStream = mpsc::Receiver<io::Result<String>>;

/// Streams standard input as UTF-8 text chunks.
#[must_use]
pub fn stdin_chunks() -> ChunkStream {
    chunks_from(io::stdin())
}

/// Streams any byte source as UTF-8 text chunks.
///
/// Reading happens on a dedicated thread so the consumer only waits on the
/// channel. A read error is delivered as the last item of the stream.
pub fn chunks_from<R>(reader: R) -> ChunkStream
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
    thread::spawn(move || pump(reader, tx));
    rx
}

fn pump<R: Read>(mut reader: R, mut tx: mpsc::Sender<io::Result<String>>) {
    let mut decoder = UTF_8.new_decoder();
    let mut buf = vec![0_u8; CHUNK_SIZE];
    let mut bytes_read: usize = 0;

    loop {
        let (item, done) = match reader.read(&mut buf) {
            Ok(0) => (Ok(decode_chunk(&mut decoder, &[], true)), true),
            Ok(n) => {
                bytes_read = bytes_read.saturating_add(n);
                let bytes = buf.get(..n).unwrap_or_default();
                (Ok(decode_chunk(&mut decoder, bytes, false)), false)
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => (Err(err), true),
        };

        let skip = matches!(&item, Ok(text) if text.is_empty());
        if !skip && block_on(tx.send(item)).is_err() {
            trace!("chunk receiver dropped, stopping reader");
            return;
        }
        if done {
            debug!("reader finished after {bytes_read} bytes");
            return;
        }
    }
}

/// Decodes `bytes` with a streaming UTF-8 decoder.
///
/// A sequence cut off at the end of `bytes` is held in `decoder` until the
/// next call. Malformed input becomes U+FFFD, as does a cut-off sequence
/// when `last` is set. A leading byte order mark is dropped.
pub fn decode_chunk(decoder: &mut Decoder, bytes: &[u8], last: bool) -> String {
    let mut out = String::new();
    let mut src = bytes;
    loop {
        let needed = decoder
            .max_utf8_buffer_length(src.len())
            .unwrap_or(CHUNK_SIZE);
        out.reserve(needed);
        let (result, read, _had_errors) = decoder.decode_to_string(src, &mut out, last);
        src = src.get(read..).unwrap_or_default();
        match result {
            CoderResult::InputEmpty => return out,
            CoderResult::OutputFull => trace!("decode buffer full, growing"),
        }
    }
}
