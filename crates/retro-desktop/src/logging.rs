//! Tracing subscriber setup
//!
//! Log lines go to the browser console when running as WebAssembly with the
//! `wasm` feature, and to stderr everywhere else.

use std::io::{self, Write};

use tracing::Level;

const IN_BROWSER: bool = cfg!(all(feature = "wasm", target_arch = "wasm32"));

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    /// Buffers one formatted event, emitted as a single console line
    Console(Vec<u8>),
    Stderr(io::Stderr),
}

impl DelegatingWriter {
    fn new() -> Self {
        let inner = if IN_BROWSER {
            DelegatingInner::Console(Vec::new())
        } else {
            DelegatingInner::Stderr(io::stderr())
        };
        DelegatingWriter { inner }
    }
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::Console(line) => {
                line.extend_from_slice(buf);
                Ok(buf.len())
            }
            DelegatingInner::Stderr(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::Console(line) => {
                emit_console_line(line);
                Ok(())
            }
            DelegatingInner::Stderr(s) => s.flush(),
        }
    }
}

impl Drop for DelegatingWriter {
    fn drop(&mut self) {
        if let DelegatingInner::Console(line) = &mut self.inner {
            emit_console_line(line);
        }
    }
}

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
fn emit_console_line(line: &mut Vec<u8>) {
    if line.is_empty() {
        return;
    }
    let text = String::from_utf8_lossy(line);
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(text.trim_end()));
    line.clear();
}

#[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
fn emit_console_line(line: &mut Vec<u8>) {
    let _ = io::stderr().write_all(line);
    line.clear();
}

#[derive(Clone, Copy, Debug)]
pub struct SubscriberMakeWriter;

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter::new()
    }
}

/// Initialize the global tracing subscriber.
///
/// Safe to call multiple times; subsequent calls are no-ops for the global
/// subscriber.
pub fn init_default() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(SubscriberMakeWriter)
        .with_target(false)
        .with_ansi(!IN_BROWSER)
        .without_time()
        .try_init();
}
