//! Report assembly on top of a probe.

use tracing::warn;

use crate::common::error::CalcResult;

use super::domain::FALLBACK_REPORT;
use super::probe::SystemProbe;

/// Probe the host and render the report, propagating probe failures.
pub fn report<P: SystemProbe + ?Sized>(probe: &P) -> CalcResult<String> {
    Ok(probe.probe()?.report())
}

/// Probe the host, substituting [`FALLBACK_REPORT`] on failure.
pub fn report_or_fallback<P: SystemProbe + ?Sized>(probe: &P) -> String {
    match report(probe) {
        Ok(text) => text,
        Err(err) => {
            warn!(code = err.code() as u32, %err, "system query failed");
            FALLBACK_REPORT.to_string()
        }
    }
}
