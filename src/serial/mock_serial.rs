use crate::serial::traits::ReadWrite;
use std::io::{Read, Write};

#[cfg(test)]
pub struct MockReadWrite<'a> {
    read_buf: Vec<&'a [u8]>,
    pub write_buf: Vec<u8>,
    pointer: usize,
}

#[cfg(test)]
impl<'a> MockReadWrite<'a> {
    pub fn new(data: Vec<&'a [u8]>) -> MockReadWrite<'a> {
        MockReadWrite {
            read_buf: data,
            write_buf: Vec::new(),
            pointer: 0,
        }
    }
}

#[cfg(test)]
impl<'a> Read for MockReadWrite<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::result::Result<usize, std::io::Error> {
        if self.read_buf.len() <= self.pointer {
            return Ok(0);
        }
        let data = self.read_buf[self.pointer];
        buf[..data.len()].copy_from_slice(data);
        self.pointer += 1;
        Ok(data.len())
    }
}

#[cfg(test)]
impl<'a> Write for MockReadWrite<'a> {
    fn write(&mut self, bin: &[u8]) -> std::result::Result<usize, std::io::Error> {
        self.write_buf.extend_from_slice(bin);
        Ok(bin.len())
    }

    fn flush(&mut self) -> std::result::Result<(), std::io::Error> {
        // Do nothing
        Ok(())
    }
}

#[cfg(test)]
impl<'a> ReadWrite for MockReadWrite<'a> {}
