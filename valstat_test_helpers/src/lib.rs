//! Test helpers shared across crates.
//!
//! This crate currently provides log capture for asserting on `tracing`
//! output.

pub mod logs {
    //! Capture `tracing` output emitted inside a closure.
    //!
    //! The subscriber is installed as the thread-local default for the
    //! duration of the closure only, so tests can run in parallel.
    //!
    //! # Examples
    //!
    //! ```
    //! use valstat_test_helpers::logs;
    //!
    //! let ((), captured) = logs::capture(|| tracing::debug!(answer = 42, "hello"));
    //! assert!(captured.contains("answer=42"));
    //! ```

    use std::io;
    use std::sync::Arc;

    use parking_lot::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    /// Buffer holding every line written while capturing.
    #[derive(Debug, Clone, Default)]
    pub struct CapturedLogs {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl CapturedLogs {
        /// All captured output as UTF-8 text.
        #[must_use]
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.buffer.lock()).into_owned()
        }

        /// Whether any captured output contains `needle`.
        #[must_use]
        pub fn contains(&self, needle: &str) -> bool {
            self.contents().contains(needle)
        }

        /// Captured output split into lines.
        #[must_use]
        pub fn lines(&self) -> Vec<String> {
            self.contents().lines().map(str::to_owned).collect()
        }
    }

    /// Writer handed to the subscriber for each event.
    #[derive(Debug)]
    pub struct CapturedWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl io::Write for CapturedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedWriter;

        fn make_writer(&'a self) -> Self::Writer {
            CapturedWriter {
                buffer: Arc::clone(&self.buffer),
            }
        }
    }

    /// Run `f` with a subscriber that records every event down to `TRACE`.
    pub fn capture<F, R>(f: F) -> (R, CapturedLogs)
    where
        F: FnOnce() -> R,
    {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .without_time()
            .with_target(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs)
    }

}
