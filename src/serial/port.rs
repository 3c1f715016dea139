use super::traits::ReadWrite;
use crate::serial::buffer::Buffer;
use crate::serial::errors::Result;
use crate::serial::wrapper::Wrapper;
use crate::serial::Connection;
use std::io::Write;
use std::time::Duration;

const READ_TIMEOUT: Duration = Duration::from_millis(100);

struct ConnectionImpl<T: ReadWrite> {
    pub(in crate::serial::port) connection: T,
    read_buffer: Buffer,
}

impl<T: ReadWrite> Connection for ConnectionImpl<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.connection.write_all(data)?;
        self.connection.flush()?;
        log::trace!("Serial Input: {}", String::from_utf8_lossy(data).trim_end());
        Ok(())
    }

    fn drain(&mut self) -> Result<Vec<u8>> {
        let mut response = Vec::new();
        while let Some(chunk) = self.read_buffer.fill_from(&mut self.connection)? {
            response.extend_from_slice(chunk);
        }
        if !response.is_empty() {
            log::trace!("Serial Output: {}", String::from_utf8_lossy(&response).trim_end());
        }
        Ok(response)
    }
}

pub fn new(path: &str, baud_rate: u32) -> Result<impl Connection> {
    let connection = serialport::new(path, baud_rate)
        .timeout(READ_TIMEOUT)
        .open()?;

    Ok(ConnectionImpl {
        connection: Wrapper::new(connection),
        read_buffer: Buffer::new(128),
    })
}
