//! Wire protocol for the UART2WBM Wishbone bus bridge.
//!
//! Requests are fixed-size binary frames, little-endian throughout:
//! a 1-byte command, a 2-byte register address, and (for writes) a
//! 4-byte data word. The bridge answers every request with a 1-byte
//! status, followed by a 4-byte data word for reads. The codec works
//! over any `Read`/`Write` byte stream; the UART itself lives in the
//! `uart2wb` client crate.

mod codec;
mod message;

pub use codec::{decode_ack, decode_read, encode};
pub use message::{CMD_READ, CMD_WRITE, ReadReply, Request};
