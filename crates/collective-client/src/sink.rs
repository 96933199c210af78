//! Destinations for encoded protocol lines.
//!
//! The composer hands every accepted message's line to a [`ProtocolSink`],
//! one call per successful append, in append order. What happens after that
//! (logging, a future transport) is the sink's business.

use std::io::Write;

use collective_shared::ProtocolLine;

pub const PROTOCOL_TARGET: &str = "collective::protocol";

pub trait ProtocolSink {
    fn emit(&mut self, line: &ProtocolLine);
}

/// Logs each line at `info` under the `collective::protocol` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProtocolSink for TracingSink {
    fn emit(&mut self, line: &ProtocolLine) {
        tracing::info!(target: PROTOCOL_TARGET, "Protocol: {line}");
    }
}

/// Keeps every emitted line in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<ProtocolLine>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ProtocolLine] {
        &self.lines
    }

    pub fn take(&mut self) -> Vec<ProtocolLine> {
        std::mem::take(&mut self.lines)
    }
}

impl ProtocolSink for MemorySink {
    fn emit(&mut self, line: &ProtocolLine) {
        self.lines.push(line.clone());
    }
}

/// Writes each line, newline-terminated, to an [`io::Write`](std::io::Write).
///
/// Write failures are logged and dropped; delivery is not guaranteed.
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProtocolSink for WriterSink<W> {
    fn emit(&mut self, line: &ProtocolLine) {
        if let Err(e) = writeln!(self.writer, "{line}").and_then(|()| self.writer.flush()) {
            tracing::warn!(error = %e, "Failed to write protocol line");
        }
    }
}

impl<S: ProtocolSink + ?Sized> ProtocolSink for &mut S {
    fn emit(&mut self, line: &ProtocolLine) {
        (**self).emit(line);
    }
}

impl<S: ProtocolSink + ?Sized> ProtocolSink for Box<S> {
    fn emit(&mut self, line: &ProtocolLine) {
        (**self).emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use collective_shared::Message;

    fn line(content: &str) -> ProtocolLine {
        Message {
            id: "1".into(),
            entity: "Sage".into(),
            to: "All".into(),
            thread: "General".into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
        .encode()
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.emit(&line("a"));
        sink.emit(&line("b"));
        let contents: Vec<&str> = sink.lines().iter().map(ProtocolLine::as_str).collect();
        assert_eq!(
            contents,
            [
                "[entity=Sage] [to=All] [thread=General] [v=1] :: a",
                "[entity=Sage] [to=All] [thread=General] [v=1] :: b",
            ]
        );
        assert_eq!(sink.take().len(), 2);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_writer_sink_one_line_per_emit() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit(&line("hi"));
        sink.emit(&line("there"));
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "[entity=Sage] [to=All] [thread=General] [v=1] :: hi\n\
             [entity=Sage] [to=All] [thread=General] [v=1] :: there\n"
        );
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.emit(&line("quiet"));
    }

    fn emit_into<S: ProtocolSink>(mut sink: S, line: &ProtocolLine) {
        sink.emit(line);
    }

    #[test]
    fn test_borrowed_and_boxed_sinks_forward() {
        let mut inner = MemorySink::new();
        emit_into(&mut inner, &line("x"));
        assert_eq!(inner.lines().len(), 1);

        let mut boxed: Box<dyn ProtocolSink> = Box::new(MemorySink::new());
        boxed.emit(&line("y"));
    }
}
