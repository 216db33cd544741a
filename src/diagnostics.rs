//! Diagnostics gated by [`Settings::log_errors`](crate::Settings::log_errors).

/// Prefix prepended to every diagnostic message.
pub const LOG_PREFIX: &str = "pwd-checklist: ";

/// Diagnostic messages emitted by the checker.
pub mod errors {
    pub const NO_RULES_SET: &str = "No rules set.";
}

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

/// Writes `msg` with [`LOG_PREFIX`] at `severity` when `enabled` is set.
///
/// Requires the `tracing` feature; without it this is always a no-op.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn log_error(enabled: bool, msg: &str, severity: Severity) {
    if !enabled {
        return;
    }

    #[cfg(feature = "tracing")]
    {
        match severity {
            Severity::Error => tracing::error!("{}{}", LOG_PREFIX, msg),
            Severity::Warn => tracing::warn!("{}{}", LOG_PREFIX, msg),
            Severity::Info => tracing::info!("{}{}", LOG_PREFIX, msg),
            Severity::Debug => tracing::debug!("{}{}", LOG_PREFIX, msg),
        }
    }
}

#[cfg(all(test, feature = "tracing"))]
pub(crate) mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    /// Shared buffer collecting formatted log lines.
    #[derive(Clone, Default)]
    pub struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs `f` with a subscriber writing every level into the returned buffer.
    pub fn logs<F: FnOnce()>(f: F) -> String {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }
}
