use crate::loader::errors::{Error, Result};
use crate::serial::Connection;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Switches the interpreter from immediate mode to load mode.
pub const LOAD_COMMAND: &[u8] = b"$basic load\n";

/// Newline then NUL, ends load mode on the device side.
pub const TERMINATOR: &[u8] = b"\n\x00";

/// Fixed pauses between a write and the following drain. The device gives no
/// acknowledgment in load mode, so pacing is the only flow control there is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub line_delay: Duration,
    pub final_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            line_delay: Duration::from_millis(100),
            final_delay: Duration::from_millis(200),
        }
    }
}

impl Timing {
    /// No pauses at all. Tests use this so they do not sleep.
    pub const fn immediate() -> Self {
        Timing {
            line_delay: Duration::ZERO,
            final_delay: Duration::ZERO,
        }
    }
}

pub struct Loader<T: Connection> {
    connection: T,
    timing: Timing,
}

impl<T: Connection> Loader<T> {
    pub fn new(connection: T, timing: Timing) -> Self {
        Loader { connection, timing }
    }

    /// Streams `source` to the device: load command first, then every line
    /// verbatim in file order, then the terminator. After each write the
    /// device's pending output is drained and echoed to `sink`.
    pub fn load<R: BufRead, W: Write>(&mut self, mut source: R, sink: &mut W) -> Result<()> {
        self.step(LOAD_COMMAND, self.timing.line_delay, sink)?;

        let mut line = String::new();
        let mut sent = 0usize;
        loop {
            line.clear();
            let n = source.read_line(&mut line).map_err(Error::FileRead)?;
            if n == 0 {
                break;
            }
            self.step(line.as_bytes(), self.timing.line_delay, sink)?;
            sent += 1;
        }
        log::info!("sent {} program lines", sent);

        self.step(TERMINATOR, self.timing.final_delay, sink)
    }

    // One write, the matching pause, then drain-and-echo. Nothing is written
    // to the device until the previous step's response has been echoed.
    fn step<W: Write>(&mut self, data: &[u8], pause: Duration, sink: &mut W) -> Result<()> {
        self.connection.send(data)?;
        thread::sleep(pause);
        let response = String::from_utf8(self.connection.drain()?)?;
        write!(sink, "{}", response).map_err(Error::Echo)?;
        sink.flush().map_err(Error::Echo)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::loader::mock::MockSerial;
    use crate::serial::Error as SerialError;
    use mockall::Sequence;
    use std::io::Cursor;

    fn new_loader<F>(prepare_mock: F) -> Loader<MockSerial>
    where
        F: Fn(&mut MockSerial),
    {
        let mut mock = MockSerial::new();
        prepare_mock(&mut mock);
        Loader::new(mock, Timing::immediate())
    }

    fn expect_step(mock: &mut MockSerial, seq: &mut Sequence, data: &'static [u8], reply: &'static [u8]) {
        mock.expect_send()
            .withf(move |sent: &[u8]| sent == data)
            .times(1)
            .in_sequence(seq)
            .returning(|_| Ok(()));
        mock.expect_drain()
            .times(1)
            .in_sequence(seq)
            .returning(move || Ok(reply.to_vec()));
    }

    #[test]
    fn writes_in_file_order() {
        let mut loader = new_loader(|mock| {
            let mut seq = Sequence::new();
            expect_step(mock, &mut seq, b"$basic load\n", b"");
            expect_step(mock, &mut seq, b"A\n", b"");
            expect_step(mock, &mut seq, b"B\n", b"");
            expect_step(mock, &mut seq, b"C\n", b"");
            expect_step(mock, &mut seq, b"\n\x00", b"");
        });

        let mut sink = Vec::new();
        loader.load(Cursor::new("A\nB\nC\n"), &mut sink).unwrap();
        assert_eq!(b"".to_vec(), sink);
    }

    #[test]
    fn empty_file_sends_command_and_terminator_only() {
        let mut loader = new_loader(|mock| {
            let mut seq = Sequence::new();
            expect_step(mock, &mut seq, b"$basic load\n", b"LOAD\r\n");
            expect_step(mock, &mut seq, b"\n\x00", b"READY\r\n");
        });

        let mut sink = Vec::new();
        loader.load(Cursor::new(""), &mut sink).unwrap();
        assert_eq!(b"LOAD\r\nREADY\r\n".to_vec(), sink);
    }

    #[test]
    fn last_line_without_newline_sent_verbatim() {
        let mut loader = new_loader(|mock| {
            let mut seq = Sequence::new();
            expect_step(mock, &mut seq, b"$basic load\n", b"");
            expect_step(mock, &mut seq, b"10 PRINT 1\n", b"");
            expect_step(mock, &mut seq, b"20 END", b"");
            expect_step(mock, &mut seq, b"\n\x00", b"");
        });

        let mut sink = Vec::new();
        loader
            .load(Cursor::new("10 PRINT 1\n20 END"), &mut sink)
            .unwrap();
    }

    #[test]
    fn transcript_concatenates_responses() {
        let mut loader = new_loader(|mock| {
            let mut seq = Sequence::new();
            expect_step(mock, &mut seq, b"$basic load\n", b"LOAD\r\n");
            expect_step(mock, &mut seq, b"A\n", b".");
            expect_step(mock, &mut seq, b"B\n", b".");
            expect_step(mock, &mut seq, b"\n\x00", b"OK\r\n");
        });

        let mut sink = Vec::new();
        loader.load(Cursor::new("A\nB\n"), &mut sink).unwrap();
        assert_eq!(b"LOAD\r\n..OK\r\n".to_vec(), sink);
    }

    #[test]
    fn send_failure_is_transfer_error() {
        let mut loader = new_loader(|mock| {
            mock.expect_send().times(1).returning(|_| {
                Err(SerialError::IoError(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "gone",
                )))
            });
        });

        let mut sink = Vec::new();
        let result = loader.load(Cursor::new("A\n"), &mut sink);
        assert!(matches!(result, Err(Error::Transfer(_))));
    }

    #[test]
    fn invalid_utf8_response_is_decode_error() {
        let mut loader = new_loader(|mock| {
            mock.expect_send().times(1).returning(|_| Ok(()));
            mock.expect_drain()
                .times(1)
                .returning(|| Ok(vec![0xFF, 0xFE]));
        });

        let mut sink = Vec::new();
        let result = loader.load(Cursor::new("A\n"), &mut sink);
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
