//! Minimal line-oriented event recorder.
//!
//! A [`Tracer`] writes one human-readable line per call to whatever sink it was
//! built with. An unconfigured tracer accepts every call and does nothing, so
//! callers can trace unconditionally.
//!
//! ```
//! use tracer::{trace, Tracer};
//!
//! let tracer = Tracer::off();
//! trace!(tracer, "client joined: {}", "abc123");
//! assert!(!tracer.is_enabled());
//! ```

use std::{
    fmt,
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// Writes a formatted line to a [`Tracer`].
#[macro_export]
macro_rules! trace {
    ($tracer:expr, $($arg:tt)+) => {
        $tracer.trace(::std::format_args!($($arg)+))
    };
}

enum Sink {
    Writer(Mutex<Box<dyn Write + Send>>),
    Tracing,
}

/// Handle to a shared trace sink.
///
/// Clones share the same sink. Lines from concurrent callers are serialized,
/// so a single line is never split by another caller's output.
#[derive(Clone, Default)]
pub struct Tracer {
    sink: Option<Arc<Sink>>,
}

impl Tracer {
    /// Creates a tracer that writes every line to `writer`.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Arc::new(Sink::Writer(Mutex::new(Box::new(writer))))),
        }
    }

    /// Creates a tracer that ignores every call.
    pub fn off() -> Self {
        Self { sink: None }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Creates a tracer that turns each line into an `info` event on the
    /// `tracer` target of the global `tracing` subscriber.
    pub fn forward_to_tracing() -> Self {
        Self {
            sink: Some(Arc::new(Sink::Tracing)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Records one line.
    ///
    /// Write failures on the sink are dropped.
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        let Some(sink) = self.sink.as_deref() else {
            return;
        };

        match sink {
            Sink::Writer(writer) => {
                let mut line = args.to_string();
                line.push('\n');

                // A panic while holding the lock leaves the writer usable.
                let mut writer = writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                if writer.write_all(line.as_bytes()).is_ok() {
                    let _ = writer.flush();
                }
            }
            Sink::Tracing => {
                tracing::info!(target: "tracer", "{}", args);
            }
        }
    }
}

impl fmt::Debug for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = match self.sink.as_deref() {
            None => "off",
            Some(Sink::Writer(_)) => "writer",
            Some(Sink::Tracing) => "tracing",
        };
        f.debug_struct("Tracer").field("sink", &sink).finish()
    }
}
