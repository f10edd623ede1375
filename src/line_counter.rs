//! Streaming line-terminator counting.
//!
//! A terminator is a `\r`, or a `\n` that does not directly follow a `\r`,
//! so `\r\n` counts once. Only terminators are counted: a final line with
//! no terminator adds nothing.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// Default read chunk size in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Counts line terminators in files without loading them into memory.
#[derive(Debug, Clone, Copy)]
pub struct LineCounter {
    buffer_size: usize,
}

impl Default for LineCounter {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl LineCounter {
    /// Creates a counter reading `buffer_size` bytes at a time.
    ///
    /// A zero size is bumped to one byte.
    #[must_use]
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    /// Returns the read chunk size.
    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Counts the line terminators in the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileAccess`] if the file cannot be opened and
    /// [`Error::Read`] if a read fails before end of file.
    pub fn count_lines(&self, path: &Path) -> Result<u64> {
        let file = File::open(path).map_err(|e| Error::file_access(path, &e))?;
        let lines = self.count_reader(file).map_err(|e| Error::read(path, &e))?;

        trace!("{}: {} lines", path.display(), lines);
        Ok(lines)
    }

    /// Counts the line terminators produced by `reader` until end of stream.
    ///
    /// Interrupted reads are retried.
    ///
    /// # Errors
    ///
    /// Returns the first read error other than [`io::ErrorKind::Interrupted`].
    pub fn count_reader<R: Read>(&self, mut reader: R) -> io::Result<u64> {
        let mut buf = vec![0u8; self.buffer_size];
        let mut scan = TerminatorScan::default();

        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => scan.feed(&buf[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        Ok(scan.lines)
    }
}

/// Terminator scanning state carried across chunks.
#[derive(Debug, Default)]
struct TerminatorScan {
    lines: u64,
    /// Last byte of the previous chunk was `\r`.
    after_cr: bool,
}

impl TerminatorScan {
    fn feed(&mut self, chunk: &[u8]) {
        for pos in memchr::memchr2_iter(b'\r', b'\n', chunk) {
            if chunk[pos] == b'\r' {
                self.lines += 1;
                continue;
            }

            let prev_is_cr = match pos.checked_sub(1) {
                Some(prev) => chunk[prev] == b'\r',
                None => self.after_cr,
            };
            if !prev_is_cr {
                self.lines += 1;
            }
        }

        if let Some(&last) = chunk.last() {
            self.after_cr = last == b'\r';
        }
    }
}
