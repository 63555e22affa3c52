//! Destination sinks for write sessions.

use std::fs::File;
use std::io::{self, BufWriter, Cursor, Write};

/// A byte destination with an explicit close step.
///
/// `close` consumes the sink so it cannot be written after closing. The
/// default flushes; file-backed sinks also sync to disk so a committed
/// record never points at bytes still sitting in the page cache.
pub trait ByteSink: Write {
    fn close(mut self) -> io::Result<()>
    where
        Self: Sized,
    {
        self.flush()
    }
}

impl ByteSink for File {
    fn close(mut self) -> io::Result<()> {
        self.flush()?;
        self.sync_all()
    }
}

impl ByteSink for Vec<u8> {}

impl ByteSink for Cursor<Vec<u8>> {}

impl ByteSink for io::Sink {}

impl<W: ByteSink> ByteSink for BufWriter<W> {
    fn close(self) -> io::Result<()> {
        let inner = self.into_inner().map_err(|e| e.into_error())?;
        inner.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_file_close_persists_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let mut sink = BufWriter::new(File::create(&path).unwrap());
        sink.write_all(b"buffered").unwrap();
        sink.close().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"buffered");
    }

    #[test]
    fn vec_close_is_flush() {
        let mut sink = Vec::new();
        sink.write_all(b"abc").unwrap();
        ByteSink::close(sink).unwrap();
    }
}
