//! Request and reply types for the bridge protocol.

/// Command code of a register read request.
pub const CMD_READ: u8 = 0x00;

/// Command code of a register write request.
pub const CMD_WRITE: u8 = 0x01;

/// Request sent from the host to the bridge.
///
/// Exactly one request may be in flight at a time: the protocol has no
/// transaction IDs, so replies are matched to requests by order alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Request {
    /// Read one 32-bit register.
    Read {
        /// Register address on the Wishbone bus.
        addr: u16,
    },
    /// Write one 32-bit register.
    Write {
        /// Register address on the Wishbone bus.
        addr: u16,
        /// Data word to store.
        data: u32,
    },
}

impl Request {
    /// Returns the command byte that opens the request frame.
    pub const fn command(&self) -> u8 {
        match self {
            Self::Read { .. } => CMD_READ,
            Self::Write { .. } => CMD_WRITE,
        }
    }

    /// Returns the encoded request frame length in bytes.
    pub const fn frame_len(&self) -> usize {
        match self {
            Self::Read { .. } => 3,
            Self::Write { .. } => 7,
        }
    }

    /// Returns the length in bytes of the reply the bridge sends back.
    pub const fn reply_len(&self) -> usize {
        match self {
            Self::Read { .. } => 5,
            Self::Write { .. } => 1,
        }
    }
}

/// Reply to a [`Request::Read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct ReadReply {
    /// Status byte. The bridge protocol leaves it opaque; callers must
    /// not assume ack/error semantics.
    pub status: u8,
    /// The register value, already decoded from little-endian.
    pub data: u32,
}
