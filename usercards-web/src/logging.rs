//! Browser log sink. Formats `tracing` events, including the ones emitted by
//! the shared gateway, and writes them to the developer console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Hands out a [`ConsoleWriter`] tagged with the level of each event.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { level: Level::INFO }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
        }
    }
}

/// Writes each formatted line to `console.error`, `console.warn` or
/// `console.log` depending on its level.
#[derive(Debug)]
pub(crate) struct ConsoleWriter {
    level: Level,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let line = text.trim_end();
        if line.is_empty() {
            return Ok(buf.len());
        }

        let value = JsValue::from_str(line);
        if self.level == Level::ERROR {
            console::error_1(&value);
        } else if self.level == Level::WARN {
            console::warn_1(&value);
        } else {
            console::log_1(&value);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Installs the console subscriber. Later calls are no-ops.
pub(crate) fn init() {
    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(ConsoleMakeWriter),
        )
        .with(LevelFilter::DEBUG)
        .try_init();

    if installed.is_err() {
        console::warn_1(&"tracing subscriber already installed".into());
    }
}
