//! Host identification: `uname(2)` probing and the bounded text report.

pub mod domain;
pub mod probe;
pub mod service;

pub use domain::{SystemDescriptor, FALLBACK_REPORT, REPORT_CAPACITY};
pub use probe::{SystemProbe, UnameProbe};
