//! Host-side client for a Wishbone bus behind a UART bridge.
//!
//! `uart2wb` talks to the UART2WBM module of a UART-equipped FPGA
//! design: each register access is a small fixed binary frame sent
//! over the serial line, answered by a status byte and (for reads)
//! a 32-bit data word. See [`uart2wb_proto`] for the exact framing.
//!
//! # Quick start
//!
//! ```no_run
//! use uart2wb::Client;
//!
//! let mut bus = Client::open("/dev/ttyUSB0", 9600)?;
//! bus.write(0x0004, 0x1234_5678)?;
//! let value = bus.read(0x0004)?;
//! assert_eq!(value, 0x1234_5678);
//! bus.close();
//! # Ok::<(), uart2wb::Error>(())
//! ```
//!
//! The client is strictly synchronous: one request in flight, every
//! call blocking until the reply arrives or the read timeout elapses.

mod client;
mod error;
mod transport;

pub use client::Client;
pub use error::{Error, Result};
pub use transport::{DEFAULT_TIMEOUT, Transport};
pub use uart2wb_proto::{ReadReply, Request};
