use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::buffer::FixedBuffer;
use crate::error::{BufferError, Result};

/// Indexed element access plus a size query, usable without knowing the
/// concrete storage behind it.
///
/// Object safe: `Box<dyn Container<Item = f64>>` drops the concrete value,
/// including whatever storage it owns.
pub trait Container {
    type Item;

    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    /// Panics when `index >= self.size()`.
    fn at(&mut self, index: usize) -> &mut Self::Item;

    fn size(&self) -> usize;

    fn try_at(&mut self, index: usize) -> Result<&mut Self::Item> {
        let len = self.size();
        if index < len {
            Ok(self.at(index))
        } else {
            Err(BufferError::OutOfRange { index, len })
        }
    }
}

/// The one [`Container`] variant: owns a [`FixedBuffer`] and forwards to it.
pub struct BufferContainer<T = f64> {
    v: FixedBuffer<T>,
}

impl<T: Default> BufferContainer<T> {
    pub fn new(len: usize) -> Self {
        debug!(len, "building buffer container");
        Self {
            v: FixedBuffer::new(len),
        }
    }
}

impl<T> BufferContainer<T> {
    pub fn buffer(&self) -> &FixedBuffer<T> {
        &self.v
    }
}

impl<T: Default> Container for BufferContainer<T> {
    type Item = T;

    fn with_len(len: usize) -> Self {
        BufferContainer::new(len)
    }

    fn at(&mut self, index: usize) -> &mut T {
        self.v.at(index)
    }

    fn size(&self) -> usize {
        self.v.size()
    }

    fn try_at(&mut self, index: usize) -> Result<&mut T> {
        self.v.try_at(index)
    }
}

impl<T> Index<usize> for BufferContainer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.v[index]
    }
}

impl<T> IndexMut<usize> for BufferContainer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.v[index]
    }
}

/// Build a container of `len` zeroed slots behind the abstraction.
pub fn boxed(len: usize) -> Box<dyn Container<Item = f64>> {
    Box::new(BufferContainer::<f64>::new(len))
}
