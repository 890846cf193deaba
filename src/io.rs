//! I/O wrappers that report transferred bytes to a [`StatusLine`].
//!
//! [`ProgressReader`] and [`ProgressWriter`] wrap any [`Read`] or [`Write`] and
//! forward bytes unchanged. After every successful call they add the number of
//! bytes moved to the line's progress, which may trigger a redraw. Errors from
//! that redraw surface as [`io::Error`]s.

use std::io::{self, Read, Write};

use crate::StatusLine;

/// A wrapper around [`Read`] that adds bytes read to a [`StatusLine`].
pub struct ProgressReader<R, S> {
    inner: R,
    line: StatusLine<S>,
}

impl<R, S> ProgressReader<R, S> {
    /// Creates a new `ProgressReader` wrapping `inner`, reporting to `line`.
    pub const fn new(inner: R, line: StatusLine<S>) -> Self {
        Self { inner, line }
    }

    /// Unwraps the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read, S: Write> Read for ProgressReader<R, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.line.add_progress(n as i64)?;
        Ok(n)
    }
}

/// A wrapper around [`Write`] that adds bytes written to a [`StatusLine`].
pub struct ProgressWriter<W, S> {
    inner: W,
    line: StatusLine<S>,
}

impl<W, S> ProgressWriter<W, S> {
    /// Creates a new `ProgressWriter` wrapping `inner`, reporting to `line`.
    pub const fn new(inner: W, line: StatusLine<S>) -> Self {
        Self { inner, line }
    }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write, S: Write> Write for ProgressWriter<W, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.line.add_progress(n as i64)?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
