//! Shared utilities used by the calculator core and both host boundaries.
pub mod buf;
pub mod config;
pub mod error;
pub mod log;

pub use error::{CalcCode, CalcError, CalcResult};
