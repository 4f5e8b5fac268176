//! A fixed-size owned buffer of numbers and a container abstraction over it.

pub mod buffer;
pub mod container;
pub mod demo;
pub mod error;

pub use buffer::FixedBuffer;
pub use container::{boxed, BufferContainer, Container};
pub use error::{BufferError, Result};
