//! Logging setup and the tracer capability injected into the calculator.
//!
//! Diagnostic lines ("Native: Adding 5 + 3", "Native: 17 is prime", ...) are cosmetic. They
//! go through [`Tracer`] so the arithmetic itself stays free of side effects.

use std::cell::RefCell;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::common::config::BridgeCfg;

/// Sink for per-operation diagnostic traces.
pub trait Tracer {
    /// Record one trace line for the named operation.
    fn trace(&self, op: &'static str, line: &str);
}

/// Forwards traces to `tracing` at info level.
#[derive(Copy, Clone, Debug)]
pub struct TracingTracer {
    enabled: bool,
}

impl TracingTracer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Tracer for TracingTracer {
    fn trace(&self, op: &'static str, line: &str) {
        if self.enabled {
            tracing::info!(op, "{line}");
        }
    }
}

/// Discards every trace.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullTracer;

impl Tracer for NullTracer {
    fn trace(&self, _op: &'static str, _line: &str) {}
}

/// Keeps traces in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct CaptureTracer {
    lines: RefCell<Vec<(&'static str, String)>>,
}

impl CaptureTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trace lines recorded so far, without the operation tag.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().iter().map(|(_, l)| l.clone()).collect()
    }

    /// Operation tags recorded so far.
    pub fn ops(&self) -> Vec<&'static str> {
        self.lines.borrow().iter().map(|(op, _)| *op).collect()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Tracer for CaptureTracer {
    fn trace(&self, op: &'static str, line: &str) {
        self.lines.borrow_mut().push((op, line.to_string()));
    }
}

impl<T: Tracer + ?Sized> Tracer for &T {
    fn trace(&self, op: &'static str, line: &str) {
        (**self).trace(op, line)
    }
}

static INIT: Once = Once::new();

/// Install the stdout subscriber once per process.
///
/// A host that already installed a global subscriber keeps it.
pub fn init(cfg: &BridgeCfg) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(&cfg.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(crate::common::config::DEFAULT_LOG_FILTER));
        let installed = tracing_subscriber::fmt()
            .with_writer(std::io::stdout)
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping the host's");
        }
    });
}
