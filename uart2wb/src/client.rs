//! Host-side client for a Wishbone bus behind a UART bridge.
//!
//! Each call is one synchronous frame exchange: send the request,
//! block until the reply arrives or the transport read timeout
//! elapses. Nothing is retried or cached, and the bridge protocol has
//! no transaction IDs, so a client must never interleave requests —
//! `&mut self` on every operation enforces that within one thread.

use std::fmt;
use std::time::Duration;

use serialport::SerialPort;
use tracing::{debug, trace};
use uart2wb_proto::{Request, decode_ack, decode_read, encode};

use crate::error::{Error, Result};
use crate::transport::{DEFAULT_TIMEOUT, Transport, open_serial};

/// A client connection to a UART2WBM bus bridge.
///
/// Owns its transport exclusively; dropping the client (or calling
/// [`Client::close`]) releases the port.
pub struct Client<T = Box<dyn SerialPort>> {
    /// The underlying byte stream. `None` once closed.
    transport: Option<T>,
}

impl Client {
    /// Opens a serial port and wraps it in a client.
    ///
    /// Uses the default 2-second read timeout. Fails with
    /// [`Error::Open`] if the port is unavailable or in use.
    pub fn open(port: &str, baud: u32) -> Result<Self> {
        Self::open_with_timeout(port, baud, DEFAULT_TIMEOUT)
    }

    /// Opens a serial port with an explicit read timeout.
    pub fn open_with_timeout(port: &str, baud: u32, timeout: Duration) -> Result<Self> {
        let transport = open_serial(port, baud, timeout)?;
        debug!(port, baud, ?timeout, "serial port open, bus ready");
        Ok(Self {
            transport: Some(transport),
        })
    }
}

impl<T: Transport> Client<T> {
    /// Wraps an already-open byte stream.
    ///
    /// The transport's own read timeout (if any) bounds how long
    /// [`Client::read`] and [`Client::write`] block.
    pub fn from_transport(transport: T) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Reads the 32-bit register at `addr`.
    ///
    /// Sends a 3-byte read frame, then consumes the 1-byte status
    /// (opaque, discarded) and the 4-byte little-endian data word.
    pub fn read(&mut self, addr: u16) -> Result<u32> {
        let transport = self.transport.as_mut().ok_or(Error::Closed)?;
        encode(transport, &Request::Read { addr }).map_err(Error::Write)?;
        let reply = decode_read(transport).map_err(Error::from_read)?;
        trace!(addr, data = reply.data, status = reply.status, "bus read");
        Ok(reply.data)
    }

    /// Writes `data` to the 32-bit register at `addr`.
    ///
    /// Sends a 7-byte write frame and blocks until the bridge returns
    /// its status byte, so returning means the bridge has consumed the
    /// write. The status value itself is opaque and discarded.
    pub fn write(&mut self, addr: u16, data: u32) -> Result<()> {
        let transport = self.transport.as_mut().ok_or(Error::Closed)?;
        encode(transport, &Request::Write { addr, data }).map_err(Error::Write)?;
        let status = decode_ack(transport).map_err(Error::from_read)?;
        trace!(addr, data, status, "bus write");
        Ok(())
    }

    /// Releases the transport.
    ///
    /// Any later [`Client::read`] or [`Client::write`] fails with
    /// [`Error::Closed`] without touching the wire.
    pub fn close(&mut self) {
        if self.transport.take().is_some() {
            debug!("client closed");
        }
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("closed", &self.transport.is_none())
            .finish_non_exhaustive()
    }
}
