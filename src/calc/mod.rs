//! Arithmetic core: pure operations plus the traced `Calculator` facade.

pub mod ops;
pub mod service;

pub use service::Calculator;
