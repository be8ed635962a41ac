// lib.rs - native arithmetic & introspection bridge for the JVM
pub mod common;
pub mod calc;
pub mod sysinfo;
pub mod api;

pub use calc::Calculator;
pub use common::{CalcCode, CalcError, CalcResult};
