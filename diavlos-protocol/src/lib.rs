//! Control-transfer wire format for the Diavlos USB-to-I2C bridge
//!
//! This crate defines the binary payload a host sends over the USB control
//! channel to request an I2C transaction. The payload is densely packed and
//! untrusted; every decode path is bounds-checked before any byte is copied.
//!
//! # Payload layout
//!
//! All integers are little-endian:
//!
//! ```text
//! ┌──────────────┬───────────────┬─────┬───────────┬───────────┬────────────┐
//! │ TRANSFER_LEN │ TIMEOUT_TICKS │ LEN │ CTRL_MASK │ ADDR      │ WRITE DATA │
//! │ 4B           │ 4B            │ 1B  │ 2B        │ LEN bytes │ (writes)   │
//! └──────────────┴───────────────┴─────┴───────────┴───────────┴────────────┘
//! ```
//!
//! The addressing preamble (LEN, CTRL_MASK, ADDR) selects the target device
//! and where the bus master raises start/stop/read conditions. For write
//! requests the data to transmit follows the preamble inline; for read
//! requests the payload ends after the preamble and TRANSFER_LEN names the
//! number of bytes to read back.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod preamble;
pub mod request;

pub use preamble::{Preamble, WireError, PREAMBLE_CAPACITY};
pub use request::{RequestHeader, FIXED_LEN, PREAMBLE_OFFSET};
