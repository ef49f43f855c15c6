//! Tracing setup for the browser and for native builds

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber. `RUST_LOG` wins over
/// `default_filter` when it is set. Returns false if a subscriber was
/// already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let layer = fmt::layer().with_target(false);

    // No clock on wasm32-unknown-unknown
    #[cfg(target_arch = "wasm32")]
    let layer = layer
        .with_ansi(false)
        .without_time()
        .with_writer(console::ConsoleWriter::default);

    #[cfg(not(target_arch = "wasm32"))]
    let layer = layer.with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()
        .is_ok()
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Collects one formatted event and hands it to `console.log` on drop
    #[derive(Default)]
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
        }
    }
}
