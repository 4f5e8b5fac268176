use std::ops::{Index, IndexMut};

use tracing::{debug, trace, warn};

use crate::error::{BufferError, Result};

/// A run of `len` values allocated once and never resized.
///
/// The buffer is the sole owner of its storage. It is not `Clone`; moving it
/// hands the storage to the new owner and dropping it releases the storage.
pub struct FixedBuffer<T = f64> {
    elem: Box<[T]>,
}

impl<T: Default> FixedBuffer<T> {
    /// Allocate `len` slots, each holding `T::default()`.
    pub fn new(len: usize) -> Self {
        let elem: Box<[T]> = (0..len).map(|_| T::default()).collect();
        debug!(len, "allocated fixed buffer");
        Self { elem }
    }

    /// Like [`new`](Self::new), but takes a signed length and reports a
    /// negative length or a refused allocation instead of aborting.
    pub fn try_new(len: i64) -> Result<Self> {
        let Ok(n) = usize::try_from(len) else {
            warn!(len, "negative buffer length");
            return Err(BufferError::AllocationFailed { len });
        };

        let mut v: Vec<T> = Vec::new();
        if v.try_reserve_exact(n).is_err() {
            warn!(len, "allocator refused buffer");
            return Err(BufferError::AllocationFailed { len });
        }
        v.resize_with(n, T::default);
        debug!(len = n, "allocated fixed buffer");

        Ok(Self {
            elem: v.into_boxed_slice(),
        })
    }
}

impl<T> FixedBuffer<T> {
    pub fn size(&self) -> usize {
        self.elem.len()
    }

    /// Mutable access to slot `index`.
    ///
    /// Panics when `index >= self.size()`.
    pub fn at(&mut self, index: usize) -> &mut T {
        &mut self.elem[index]
    }

    pub fn get(&self, index: usize) -> &T {
        &self.elem[index]
    }

    /// Bounds-checked variant of [`at`](Self::at).
    pub fn try_at(&mut self, index: usize) -> Result<&mut T> {
        let len = self.elem.len();
        match self.elem.get_mut(index) {
            Some(slot) => Ok(slot),
            None => {
                warn!(index, len, "rejected out of range access");
                Err(BufferError::OutOfRange { index, len })
            }
        }
    }

    /// Access without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.size()`.
    pub unsafe fn at_unchecked(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.elem.len());
        self.elem.get_unchecked_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elem
    }
}

impl<T> Drop for FixedBuffer<T> {
    fn drop(&mut self) {
        trace!(len = self.elem.len(), "releasing fixed buffer");
    }
}

impl<T> Index<usize> for FixedBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elem[index]
    }
}

impl<T> IndexMut<usize> for FixedBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elem[index]
    }
}
