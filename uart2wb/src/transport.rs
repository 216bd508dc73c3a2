//! Byte-stream transport carrying bridge frames.
//!
//! The protocol only needs a duplex byte stream, so the client is
//! generic over [`Transport`]. Real hardware sits behind a serial
//! port; tests substitute in-memory streams.

use std::io::{Read, Write};
use std::time::Duration;

use serialport::SerialPort;

use crate::error::{Error, Result};

/// Read timeout applied to serial ports opened by [`open_serial`].
///
/// Long enough for the slowest supported baud rates; a reply that has
/// not arrived by then is not coming.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// A duplex byte stream the client can run the bridge protocol over.
///
/// Blanket-implemented for anything that is `Read + Write`.
pub trait Transport: Read + Write {}

impl<T: Read + Write> Transport for T {}

/// Opens a serial port with the given baud rate and read timeout.
pub(crate) fn open_serial(
    port: &str,
    baud: u32,
    timeout: Duration,
) -> Result<Box<dyn SerialPort>> {
    serialport::new(port, baud)
        .timeout(timeout)
        .open()
        .map_err(|source| Error::Open {
            port: port.to_owned(),
            source,
        })
}
