//! Fixed-frame codec over any `Read`/`Write` stream.
//!
//! Request frame: `[command][addr lo][addr hi]` plus, for writes, the
//! 4-byte little-endian data word. Replies carry a 1-byte status and,
//! for reads only, 4 data bytes. A short reply surfaces as
//! [`io::ErrorKind::UnexpectedEof`] (or `TimedOut` on a real serial
//! port); there are no partial results.

use std::io::{self, Read, Write};

use crate::message::{ReadReply, Request};

/// Encodes `req` as a request frame and writes it to `w`.
pub fn encode<W: Write>(w: &mut W, req: &Request) -> io::Result<()> {
    let mut frame = [0u8; 7];
    frame[0] = req.command();
    match *req {
        Request::Read { addr } => {
            frame[1..3].copy_from_slice(&addr.to_le_bytes());
        }
        Request::Write { addr, data } => {
            frame[1..3].copy_from_slice(&addr.to_le_bytes());
            frame[3..7].copy_from_slice(&data.to_le_bytes());
        }
    }
    w.write_all(&frame[..req.frame_len()])?;
    w.flush()
}

/// Reads the reply to a [`Request::Read`]: 1 status byte + 4 data bytes.
pub fn decode_read<R: Read>(r: &mut R) -> io::Result<ReadReply> {
    let status = decode_ack(r)?;
    let mut data = [0u8; 4];
    r.read_exact(&mut data)?;
    Ok(ReadReply {
        status,
        data: u32::from_le_bytes(data),
    })
}

/// Reads the reply to a [`Request::Write`]: the bare status byte.
pub fn decode_ack<R: Read>(r: &mut R) -> io::Result<u8> {
    let mut status = [0u8; 1];
    r.read_exact(&mut status)?;
    Ok(status[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(req: &Request) -> Vec<u8> {
        let mut buf = Vec::new();
        encode(&mut buf, req).unwrap();
        buf
    }

    #[test]
    fn read_frame_is_three_bytes() {
        assert_eq!(encoded(&Request::Read { addr: 0x0004 }), [0x00, 0x04, 0x00]);
    }

    #[test]
    fn write_frame_is_seven_bytes() {
        let req = Request::Write {
            addr: 0x0004,
            data: 0x1234_5678,
        };
        assert_eq!(
            encoded(&req),
            [0x01, 0x04, 0x00, 0x78, 0x56, 0x34, 0x12]
        );
    }

    #[test]
    fn address_is_little_endian() {
        assert_eq!(encoded(&Request::Read { addr: 0x8844 }), [0x00, 0x44, 0x88]);
        assert_eq!(encoded(&Request::Read { addr: 0x0000 }), [0x00, 0x00, 0x00]);
        assert_eq!(encoded(&Request::Read { addr: 0xFFFF }), [0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn frame_lengths_match_encoding() {
        let read = Request::Read { addr: 0xBEEF };
        let write = Request::Write {
            addr: 0xBEEF,
            data: 0xDEAD_BEEF,
        };
        assert_eq!(encoded(&read).len(), read.frame_len());
        assert_eq!(encoded(&write).len(), write.frame_len());
    }

    #[test]
    fn decode_read_is_little_endian() {
        let mut cursor = io::Cursor::new([0x00, 0x78, 0x56, 0x34, 0x12]);
        let reply = decode_read(&mut cursor).unwrap();
        assert_eq!(reply.status, 0x00);
        assert_eq!(reply.data, 0x1234_5678);
    }

    #[test]
    fn decode_read_ignores_status_value() {
        // The status byte is opaque; 0xFF must decode like 0x00.
        for status in [0x00, 0x01, 0xFF] {
            let mut cursor = io::Cursor::new([status, 0xEF, 0xBE, 0xAD, 0xDE]);
            let reply = decode_read(&mut cursor).unwrap();
            assert_eq!(reply.status, status);
            assert_eq!(reply.data, 0xDEAD_BEEF);
        }
    }

    #[test]
    fn data_roundtrips_at_boundaries() {
        for data in [0u32, 1, 0x1234_5678, u32::MAX] {
            let req = Request::Write { addr: 0, data };
            let frame = encoded(&req);
            let mut cursor = io::Cursor::new(&frame[3..7]);
            let mut buf = [0u8; 4];
            cursor.read_exact(&mut buf).unwrap();
            assert_eq!(u32::from_le_bytes(buf), data);
        }
    }

    #[test]
    fn short_read_reply_is_an_error() {
        // Status arrived but the data word did not.
        let mut cursor = io::Cursor::new([0x00, 0x78, 0x56]);
        let err = decode_read(&mut cursor).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn missing_ack_is_an_error() {
        let mut cursor = io::Cursor::new([0u8; 0]);
        let err = decode_ack(&mut cursor).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn reply_lengths() {
        assert_eq!(Request::Read { addr: 0 }.reply_len(), 5);
        assert_eq!(Request::Write { addr: 0, data: 0 }.reply_len(), 1);
    }

    #[test]
    fn command_codes() {
        assert_eq!(Request::Read { addr: 0 }.command(), crate::CMD_READ);
        assert_eq!(Request::Write { addr: 0, data: 0 }.command(), crate::CMD_WRITE);
    }
}
