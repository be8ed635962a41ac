//! Fallibly allocated buffers for array marshalling.
//!
//! Allocation failure has to surface as a null result at the boundary instead
//! of aborting the host process, so these never go through the infallible
//! `Vec` growth paths.

use crate::common::error::{CalcError, CalcResult};

/// Owned, exactly sized element buffer obtained with `try_reserve_exact`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScratchBuffer<T> {
    inner: Vec<T>,
}

impl<T> ScratchBuffer<T> {
    /// Reserve room for exactly `len` elements.
    pub fn try_with_capacity(len: usize) -> CalcResult<Self> {
        let mut inner = Vec::new();
        inner
            .try_reserve_exact(len)
            .map_err(|_| CalcError::OutOfMemory { elements: len })?;
        Ok(Self { inner })
    }

    /// Copy a borrowed slice into a freshly owned buffer.
    pub fn try_copy_from(src: &[T]) -> CalcResult<Self>
    where
        T: Copy,
    {
        let mut buf = Self::try_with_capacity(src.len())?;
        buf.inner.extend_from_slice(src);
        Ok(buf)
    }

    /// Append without reallocating. Callers reserve up front.
    pub fn push(&mut self, value: T) -> CalcResult<()> {
        if self.inner.len() == self.inner.capacity() {
            return Err(CalcError::OutOfMemory {
                elements: self.inner.len() + 1,
            });
        }
        self.inner.push(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Hand the storage over to the caller.
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }
}
