//! Error handling primitives shared across the bridge.
//!
//! Internally every fallible operation returns [`CalcResult`]. The host-facing
//! layers in `api` translate errors back into the sentinel, fallback and null
//! encodings the Java side expects.

use thiserror::Error;

/// Stable error codes that cross the C ABI.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CalcCode {
    /// Success.
    Ok = 0,
    /// Input outside the operation's domain.
    InvalidInput = 1,
    /// The host operating system could not be queried.
    HostQuery = 2,
    /// An output or scratch buffer could not be allocated.
    OutOfMemory = 3,
    /// Catch-all for failures of the managed runtime itself.
    Internal = 4,
}

impl CalcCode {
    /// Decode a raw status value, if it is one we hand out.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ok),
            1 => Some(Self::InvalidInput),
            2 => Some(Self::HostQuery),
            3 => Some(Self::OutOfMemory),
            4 => Some(Self::Internal),
            _ => None,
        }
    }

    /// Human readable description, kept `'static` for FFI use.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::InvalidInput => "invalid input",
            Self::HostQuery => "unable to query the host system",
            Self::OutOfMemory => "out of memory",
            Self::Internal => "internal error",
        }
    }
}

/// Canonical error type for the bridge.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Factorial was requested for a negative bound.
    #[error("factorial is undefined for negative input {0}")]
    NegativeFactorial(i32),

    /// `uname(2)` (or its platform equivalent) failed.
    #[error("system identification query failed (errno {errno})")]
    SystemQuery { errno: i32 },

    /// A buffer of the given element count could not be obtained.
    #[error("unable to allocate {elements} elements")]
    OutOfMemory { elements: usize },

    /// A null pointer was passed alongside a non-zero length.
    #[error("null pointer passed with non-zero length")]
    InvalidPointer,

    /// A call into the JVM failed; a Java exception may be pending.
    #[error("jni call failed: {0}")]
    Jni(String),
}

/// Result alias used throughout the crate.
pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    /// Map onto the stable code table.
    pub const fn code(&self) -> CalcCode {
        match self {
            Self::NegativeFactorial(_) | Self::InvalidPointer => CalcCode::InvalidInput,
            Self::SystemQuery { .. } => CalcCode::HostQuery,
            Self::OutOfMemory { .. } => CalcCode::OutOfMemory,
            Self::Jni(_) => CalcCode::Internal,
        }
    }
}

impl From<jni::errors::Error> for CalcError {
    fn from(err: jni::errors::Error) -> Self {
        Self::Jni(err.to_string())
    }
}
