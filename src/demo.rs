//! The tour's first program: store one number from the input into slot 2 of a
//! three-slot buffer, then print it back together with the buffer's size.

use std::io::{self, BufRead, Write};
use std::num::ParseFloatError;

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::buffer::FixedBuffer;
use crate::container::{self, Container};
use crate::error::BufferError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("no value on input")]
    MissingInput,

    #[error("invalid value on input: {0}")]
    Parse(#[from] ParseFloatError),

    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub len: usize,
    pub index: usize,
    /// Read from the input when `None`.
    pub value: Option<f64>,
    pub checked: bool,
    pub container: bool,
    pub dump: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            len: 3,
            index: 2,
            value: None,
            checked: false,
            container: false,
            dump: false,
        }
    }
}

/// First whitespace separated token of `input`, as a number.
pub fn read_value<R: BufRead>(input: R) -> Result<f64, DemoError> {
    for line in input.lines() {
        let line = line?;
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.parse()?);
        }
    }
    Err(DemoError::MissingInput)
}

pub fn run<R: BufRead, W: Write>(
    opts: &DemoOptions,
    input: R,
    mut out: W,
) -> Result<(), DemoError> {
    let value = match opts.value {
        Some(v) => v,
        None => read_value(input)?,
    };
    debug!(value, len = opts.len, index = opts.index, "running demo");

    let (stored, size, slots) = if opts.container {
        let mut c = container::boxed(opts.len);
        let slot = if opts.checked {
            c.try_at(opts.index)?
        } else {
            c.at(opts.index)
        };
        *slot = value;
        let stored = *c.at(opts.index);
        let size = c.size();
        let slots = (0..size).map(|i| *c.at(i)).join(" ");
        (stored, size, slots)
    } else {
        let mut v = FixedBuffer::<f64>::new(opts.len);
        let slot = if opts.checked {
            v.try_at(opts.index)?
        } else {
            v.at(opts.index)
        };
        *slot = value;
        (v[opts.index], v.size(), v.as_slice().iter().join(" "))
    };

    writeln!(out, "{} {}", stored, size)?;
    if opts.dump {
        writeln!(out, "{}", slots)?;
    }
    Ok(())
}
