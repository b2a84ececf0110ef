//! SSE streaming support for chat completions.
//!
//! Converts the Server-Sent-Events byte stream produced by the service into
//! text increments delivered to a [`DeltaSink`]. The wire format is:
//!
//! ```text
//! data: {"id":"...","choices":[{"index":0,"delta":{"content":"Hi"}}]}
//!
//! data: [DONE]
//! ```
//!
//! Blank lines and non-`data:` lines are separators or comments and are
//! ignored. Decoding is byte-chunking invariant: a line split across any
//! number of reads yields the same increments as one delivered whole.

use futures::StreamExt;
use reqwest::Response;
use zai_types::{ChatError, DeltaSink, StreamFrame};

/// Marker prefix of a data-carrying SSE line.
const DATA_PREFIX: &str = "data: ";

/// Sentinel payload signalling intentional end of stream.
const DONE_SENTINEL: &str = "[DONE]";

/// Pump the response body through the decoder, delivering increments to
/// `sink` until the `[DONE]` sentinel, the end of the byte stream, a read
/// error, or a sink failure.
///
/// A stream that closes without the sentinel completes successfully. A
/// trailing fragment that never received its newline is discarded.
pub(crate) async fn drive<S: DeltaSink>(response: Response, sink: &mut S) -> Result<(), ChatError> {
    let mut bytes = std::pin::pin!(response.bytes_stream());
    let mut buffer = LineBuffer::new();

    while let Some(chunk) = bytes.next().await {
        let chunk = chunk.map_err(|e| ChatError::StreamRead(Box::new(e)))?;

        for line in buffer.split_lines(&chunk) {
            match decode_line(&line) {
                LineOutcome::Delta(text) => sink.accept(&text).map_err(ChatError::Sink)?,
                // The sentinel ends the call immediately; lines already
                // reassembled behind it are discarded unprocessed.
                LineOutcome::Done => return Ok(()),
                LineOutcome::Skip => {}
            }
        }
    }

    Ok(())
}

/// Reassembles newline-delimited lines from arbitrarily-chunked bytes.
///
/// Bytes after the last newline are retained across calls as the residual
/// buffer.
#[derive(Debug, Default)]
struct LineBuffer {
    residual: Vec<u8>,
}

impl LineBuffer {
    fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` and return every complete line it closes.
    fn split_lines(&mut self, chunk: &[u8]) -> Vec<String> {
        self.residual.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.residual.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.residual.drain(..=pos).collect();
            lines.push(String::from_utf8_lossy(&line[..pos]).into_owned());
        }
        lines
    }
}

/// What one complete line contributes to the stream.
#[derive(Debug, PartialEq)]
enum LineOutcome {
    /// A text increment to deliver.
    Delta(String),
    /// The end-of-stream sentinel.
    Done,
    /// Nothing to deliver: blank, comment, malformed, or empty delta.
    Skip,
}

/// Classify one reassembled line.
///
/// Only `data: ` lines carry frames. A payload that is not valid frame
/// JSON is dropped rather than aborting the stream. A decoded frame
/// contributes an increment only when its primary (first) choice has
/// non-empty delta content.
fn decode_line(line: &str) -> LineOutcome {
    let Some(payload) = line.trim().strip_prefix(DATA_PREFIX) else {
        return LineOutcome::Skip;
    };

    if payload == DONE_SENTINEL {
        return LineOutcome::Done;
    }

    let Ok(frame) = serde_json::from_str::<StreamFrame>(payload) else {
        return LineOutcome::Skip;
    };

    match frame.choices.into_iter().next() {
        Some(choice) if !choice.delta.content.is_empty() => {
            LineOutcome::Delta(choice.delta.content)
        }
        _ => LineOutcome::Skip,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
