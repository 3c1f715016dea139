use std::io::{ErrorKind, Read};

/// Fixed-size read chunk used to pull accumulated response bytes off a port.
/// A read timeout is not an error here: it means the device has nothing more
/// to say right now.
pub struct Buffer {
    pub(self) data: Vec<u8>,
}

impl Buffer {
    pub fn new(buf_size: usize) -> Buffer {
        Buffer {
            data: vec![0u8; buf_size],
        }
    }

    /// Performs one read. `Ok(Some(..))` holds the bytes that arrived,
    /// `Ok(None)` means the channel is idle (EOF, timeout, or would block).
    pub fn fill_from<R: Read>(&mut self, reader: &mut R) -> Result<Option<&[u8]>, std::io::Error> {
        match reader.read(&mut self.data) {
            Ok(0) => Ok(None),
            Ok(n) => Ok(Some(&self.data[..n])),
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
