//! Control-transfer request codec.
//!
//! A request header names the transfer length, a bus timeout, and the
//! addressing preamble. For write requests the data to transmit follows
//! the header inline; [`RequestHeader::parse`] returns the offset where
//! that data begins.

use crate::preamble::{Preamble, WireError};

/// Offset where the preamble region begins
pub const PREAMBLE_OFFSET: usize = 8;

/// Size of the fixed-layout region preceding the address bytes
pub const FIXED_LEN: usize = 11;

/// Decoded header of one control-transfer request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RequestHeader {
    /// Bytes to read from the bus, or bytes of inline data to write
    pub transfer_len: u32,
    /// Transaction timeout, interpreted by the bus driver
    pub timeout_ticks: u32,
    /// Addressing preamble for the transaction
    pub preamble: Preamble,
}

impl RequestHeader {
    /// Parse a request from a control payload
    ///
    /// Returns the header and the offset immediately past the preamble,
    /// where inline write data begins. Pure transformation; never reads
    /// past `wire.len()`.
    pub fn parse(wire: &[u8]) -> Result<(Self, usize), WireError> {
        if wire.len() < FIXED_LEN {
            return Err(WireError::Truncated);
        }

        let transfer_len = read_u32(wire, 0);
        let timeout_ticks = read_u32(wire, 4);
        let preamble = Preamble::decode(&wire[PREAMBLE_OFFSET..])?;

        let data_offset = PREAMBLE_OFFSET + preamble.wire_len();
        Ok((
            Self {
                transfer_len,
                timeout_ticks,
                preamble,
            },
            data_offset,
        ))
    }

    /// Encode this header into a byte buffer
    ///
    /// Returns the number of bytes written, which is also the offset where
    /// inline write data would follow.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        let total = PREAMBLE_OFFSET + self.preamble.wire_len();
        if buf.len() < total {
            return Err(WireError::BufferTooSmall);
        }

        buf[0..4].copy_from_slice(&self.transfer_len.to_le_bytes());
        buf[4..8].copy_from_slice(&self.timeout_ticks.to_le_bytes());
        self.preamble.encode(&mut buf[PREAMBLE_OFFSET..])?;

        Ok(total)
    }
}

fn read_u32(wire: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        wire[offset],
        wire[offset + 1],
        wire[offset + 2],
        wire[offset + 3],
    ])
}
