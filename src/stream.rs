//! Source-stream marshalling.
//!
//! A movie constructed from an already-open stream must keep that stream
//! alive for as long as the engine might read it, since decoding may run on
//! an execution context internal to the engine. [`StreamAdapter`] is the
//! library-compatible I/O adapter handed to the backend; it locks the
//! shared stream around every read and seek so the engine's background
//! context gets exclusive access per call. The lock serializes engine I/O
//! only; it does not make caller-side use of the stream safe while a
//! handle lives.

use std::io::{self, Read, Seek, SeekFrom};
use std::sync::{Arc, Mutex};

/// An open, readable, seekable input stream supplying encoded MPEG data.
///
/// `Send` is required because the engine may move the adapter into its
/// background context.
pub trait MovieStream: Read + Seek + Send {}

impl<T: Read + Seek + Send> MovieStream for T {}

/// Shared handle to a source stream.
pub type SharedStream = Arc<Mutex<dyn MovieStream>>;

/// I/O adapter wrapping a shared stream for consumption by the engine.
///
/// Holds one strong reference to the stream; the reference is released
/// when the engine drops the adapter.
pub struct StreamAdapter {
    inner: SharedStream,
}

impl StreamAdapter {
    pub(crate) fn new(inner: SharedStream) -> Self {
        Self { inner }
    }
}

impl Read for StreamAdapter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.lock() {
            Ok(mut stream) => stream.read(buf),
            Err(_) => Err(io::Error::other("source stream lock poisoned")),
        }
    }
}

impl Seek for StreamAdapter {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self.inner.lock() {
            Ok(mut stream) => stream.seek(pos),
            Err(_) => Err(io::Error::other("source stream lock poisoned")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_adapter_reads_and_seeks_through_shared_stream() {
        let stream: SharedStream = Arc::new(Mutex::new(Cursor::new(vec![1u8, 2, 3, 4])));
        let mut adapter = StreamAdapter::new(Arc::clone(&stream));

        let mut buf = [0u8; 2];
        adapter.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2]);

        adapter.seek(SeekFrom::Start(3)).unwrap();
        adapter.read_exact(&mut buf[..1]).unwrap();
        assert_eq!(buf[0], 4);
    }

    #[test]
    fn test_adapter_holds_one_reference() {
        let stream: SharedStream = Arc::new(Mutex::new(Cursor::new(Vec::new())));
        let adapter = StreamAdapter::new(Arc::clone(&stream));
        assert_eq!(Arc::strong_count(&stream), 2);
        drop(adapter);
        assert_eq!(Arc::strong_count(&stream), 1);
    }
}
