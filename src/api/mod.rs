//! Host-facing entry points: JNI for `NativeCalculator` and a plain C ABI.
//!
//! Both surfaces share one process-wide calculator. It is built on first use
//! from the configuration snapshot and never mutated afterwards.

use std::sync::OnceLock;

use crate::calc::Calculator;
use crate::common::config::BridgeCfg;
use crate::common::log::{self, TracingTracer};

pub mod ffi;
pub mod jvm;

/// ABI version reported to foreign-function callers.
pub const API_VERSION: u32 = 1;

/// Sentinel the host receives for a negative factorial bound.
pub const FACTORIAL_SENTINEL: i64 = -1;

/// Shared calculator, initialising configuration and logging on first call.
pub(crate) fn calculator() -> &'static Calculator<TracingTracer> {
    static CALCULATOR: OnceLock<Calculator<TracingTracer>> = OnceLock::new();
    CALCULATOR.get_or_init(|| {
        let cfg = BridgeCfg::load();
        log::init(&cfg);
        tracing::debug!(trace = cfg.trace, filter = %cfg.log_filter, "nativecalc bridge ready");
        Calculator::new(TracingTracer::new(cfg.trace))
    })
}

/// Collapse a factorial result into the host's sentinel encoding.
pub(crate) fn factorial_or_sentinel(n: i32) -> i64 {
    calculator().factorial(n).unwrap_or_else(|err| {
        tracing::debug!(%err, "factorial rejected");
        FACTORIAL_SENTINEL
    })
}
