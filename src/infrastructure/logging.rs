//! Tracing sink for the in-window log panel.
//!
//! Each formatted event is pushed as one `String` over a crossbeam channel; the UI drains
//! the receiver through [`ExplorerClient::poll_next`](crate::application::client::ExplorerClient::poll_next).

use crossbeam_channel::{Receiver, Sender};
use std::io;
use tracing_subscriber::fmt::MakeWriter;

/// `MakeWriter` handed to a `fmt` layer. Cloning shares the same channel.
#[derive(Clone)]
pub struct LogPanelWriter {
    lines: Sender<String>,
}

/// Per-event writer produced by [`LogPanelWriter`].
pub struct LogLine {
    lines: Sender<String>,
}

impl LogPanelWriter {
    /// Returns the writer and the receiving end the UI polls.
    pub fn channel() -> (Self, Receiver<String>) {
        let (lines, rx) = crossbeam_channel::unbounded();
        (Self { lines }, rx)
    }
}

impl io::Write for LogLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Lines are dropped once the panel receiver is gone.
        let _ = self.lines.try_send(String::from_utf8_lossy(buf).into_owned());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogPanelWriter {
    type Writer = LogLine;

    fn make_writer(&'a self) -> Self::Writer {
        LogLine {
            lines: self.lines.clone(),
        }
    }
}
