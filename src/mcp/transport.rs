//! Newline-delimited JSON-RPC framing over stdio.
//!
//! Each line on stdin is one client message and each reply goes to stdout as
//! one line. Catalog responses embed pretty-printed JSON and generated code
//! as string values, so their newlines leave the wire escaped. Logging goes
//! to stderr and never shares the stdout stream.
//!
//! The server reads and writes on one task and answers a message before it
//! reads the next.

use std::io;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

/// Line framing over any buffered reader and writer.
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

/// The transport the server runs on.
pub type StdioTransport = LineTransport<BufReader<Stdin>, Stdout>;

impl StdioTransport {
    /// Creates a transport over the process stdin and stdout.
    #[must_use]
    pub fn new() -> Self {
        LineTransport::from_parts(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Wraps an existing reader and writer.
    pub const fn from_parts(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Reads the next message line, without its `\n` or `\r\n` terminator.
    ///
    /// Returns `None` once the client closes its end.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the line is not UTF-8.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Serialises `message` and writes it as a single flushed line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or writing fails.
    pub async fn write_message<M: Serialize>(&mut self, message: &M) -> io::Result<()> {
        let json = serde_json::to_string(message).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        debug_assert!(!json.contains('\n'), "compact JSON has no raw newlines");

        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }
}
