//! Error types for uart2wb operations.

use std::io;

/// Alias for `Result<T, uart2wb::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by bus client operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The serial port could not be opened.
    #[error("failed to open serial port {port}")]
    Open {
        /// The port identifier that was requested.
        port: String,
        /// The underlying serial error.
        #[source]
        source: serialport::Error,
    },

    /// A request frame could not be written to the transport.
    #[error("transport write failed")]
    Write(#[source] io::Error),

    /// The reply did not arrive before the transport read timeout.
    #[error("timed out waiting for a reply from the bridge")]
    Timeout,

    /// An operation was attempted after [`Client::close`].
    ///
    /// [`Client::close`]: crate::Client::close
    #[error("client is closed")]
    Closed,

    /// Any other transport I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Classifies a reply-side I/O failure.
    ///
    /// A serial port reports an elapsed timeout as `TimedOut` (or
    /// `WouldBlock` on some platforms); an in-memory transport that
    /// runs dry reports `UnexpectedEof`. All three mean the same thing
    /// here: the full reply never arrived.
    pub(crate) fn from_read(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::TimedOut
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::UnexpectedEof => Self::Timeout,
            _ => Self::Io(e),
        }
    }
}
