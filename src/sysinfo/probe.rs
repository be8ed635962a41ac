//! Sources of [`SystemDescriptor`] values.

use crate::common::error::{CalcError, CalcResult};

use super::domain::SystemDescriptor;

/// Anything that can describe the host it runs on.
pub trait SystemProbe {
    fn probe(&self) -> CalcResult<SystemDescriptor>;
}

/// Queries the kernel through `uname(2)` on every call.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnameProbe;

#[cfg(unix)]
impl SystemProbe for UnameProbe {
    fn probe(&self) -> CalcResult<SystemDescriptor> {
        use std::ffi::CStr;
        use std::mem::MaybeUninit;

        let mut raw = MaybeUninit::<libc::utsname>::zeroed();
        // SAFETY: uname only writes into the struct we own.
        let rc = unsafe { libc::uname(raw.as_mut_ptr()) };
        if rc != 0 {
            let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
            return Err(CalcError::SystemQuery { errno });
        }
        // SAFETY: zero-initialised, then filled by a successful uname call.
        let raw = unsafe { raw.assume_init() };

        let field = |chars: &[libc::c_char]| {
            // SAFETY: uname NUL-terminates every field within its array, and
            // the zeroed tail guarantees a terminator regardless.
            unsafe { CStr::from_ptr(chars.as_ptr()) }
                .to_string_lossy()
                .into_owned()
        };

        Ok(SystemDescriptor {
            sysname: field(&raw.sysname),
            nodename: field(&raw.nodename),
            release: field(&raw.release),
            version: field(&raw.version),
            machine: field(&raw.machine),
        })
    }
}

#[cfg(not(unix))]
impl SystemProbe for UnameProbe {
    fn probe(&self) -> CalcResult<SystemDescriptor> {
        Err(CalcError::SystemQuery { errno: 0 })
    }
}

/// Always returns the same descriptor, or always fails.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct FixedProbe(pub(crate) CalcResult<SystemDescriptor>);

#[cfg(test)]
impl SystemProbe for FixedProbe {
    fn probe(&self) -> CalcResult<SystemDescriptor> {
        self.0.clone()
    }
}
