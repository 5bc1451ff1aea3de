//! Plaintext line-protocol emitter for carbon-cache.
//!
//! One TCP connection is opened at startup and held for the whole run.
//! Writes are fire-and-forget: the protocol has no acknowledgments, and a
//! mid-run write failure never interrupts the scan. Callers count failed
//! sends for the end-of-run report.

use std::io::Write;
use std::net::TcpStream;

use tracing::info;

use crate::app::models::DataPoint;
use crate::{Error, Result};

/// Line-protocol writer over any byte sink.
///
/// Production wraps a [`TcpStream`]; tests wrap a `Vec<u8>` and read the
/// emitted lines back.
#[derive(Debug)]
pub struct CarbonEmitter<W: Write> {
    writer: W,
    lines_sent: usize,
}

impl CarbonEmitter<TcpStream> {
    /// Open the TCP connection to a carbon-cache listener.
    ///
    /// Connection failure is fatal for both import variants; no metrics
    /// are read from disk before the backend is reachable.
    pub fn connect(address: &str) -> Result<Self> {
        let stream =
            TcpStream::connect(address).map_err(|e| Error::connection(address, e))?;
        info!("Connected to carbon backend at {}", address);
        Ok(Self::new(stream))
    }
}

impl<W: Write> CarbonEmitter<W> {
    /// Wrap an open byte sink
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_sent: 0,
        }
    }

    /// Write one `<metric> <value> <timestamp>` line.
    ///
    /// The value is passed through verbatim from the CSV cell. No flush is
    /// performed per line; the underlying stream's buffering applies.
    pub fn send(&mut self, point: &DataPoint) -> Result<()> {
        writeln!(self.writer, "{point}")
            .map_err(|e| Error::io(format!("failed to write metric line for {}", point.metric), e))?;
        self.lines_sent += 1;
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines_sent(&self) -> usize {
        self.lines_sent
    }

    /// Consume the emitter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted_lines(emitter: CarbonEmitter<Vec<u8>>) -> Vec<String> {
        let bytes = emitter.into_inner();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_send_writes_protocol_line() {
        let mut emitter = CarbonEmitter::new(Vec::new());
        let point = DataPoint::new("covid-19.germany.none.confirmed", "10", 1583020800);
        emitter.send(&point).unwrap();

        assert_eq!(
            emitted_lines(emitter),
            vec!["covid-19.germany.none.confirmed 10 1583020800"]
        );
    }

    #[test]
    fn test_value_is_passed_through_verbatim() {
        // The emitter does not validate values; whatever the CSV held goes
        // out on the wire
        let mut emitter = CarbonEmitter::new(Vec::new());
        emitter
            .send(&DataPoint::new("covid-19.x.none.deaths", "not-a-number", 0))
            .unwrap();

        assert_eq!(
            emitted_lines(emitter),
            vec!["covid-19.x.none.deaths not-a-number 0"]
        );
    }

    #[test]
    fn test_lines_sent_counts_writes() {
        let mut emitter = CarbonEmitter::new(Vec::new());
        for i in 0..3i64 {
            let point = DataPoint::new("covid-19.a.b.confirmed", i.to_string(), i);
            emitter.send(&point).unwrap();
        }
        assert_eq!(emitter.lines_sent(), 3);
    }
}
