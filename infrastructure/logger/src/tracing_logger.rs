use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target of every engine log line, e.g. `RUST_LOG=nutrition_engine=debug`.
pub const TARGET: &str = "nutrition_engine";

/// `Logger` port backed by the global `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(filter: &str, log: impl FnOnce()) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, log);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn should_emit_debug_lines_under_engine_target() {
        let output = capture("nutrition_engine=debug", || {
            TracingLogger.debug("BMR 1648.75 kcal")
        });

        assert!(output.contains("DEBUG"));
        assert!(output.contains("nutrition_engine"));
        assert!(output.contains("BMR 1648.75 kcal"));
    }

    #[test]
    fn should_be_silenced_by_target_filter() {
        let output = capture("nutrition_engine=warn", || {
            TracingLogger.info("Food catalog refreshed with 4 entries");
            TracingLogger.warn("Food catalog unavailable");
        });

        assert!(!output.contains("refreshed"));
        assert!(output.contains("Food catalog unavailable"));
    }
}
