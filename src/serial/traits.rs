use crate::serial::errors::Result;
use std::io::{Read, Write};

pub trait ReadWrite: Read + Write {}

pub trait Connection {
    /// Writes all bytes and flushes them out to the device.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Collects whatever response bytes the device has produced so far.
    /// Returns an empty vector when nothing arrived within the read timeout.
    fn drain(&mut self) -> Result<Vec<u8>>;
}
