//! Board-agnostic core logic for the Diavlos USB-to-I2C bridge
//!
//! This crate contains all bridge logic that does not depend on a
//! specific USB or I2C peripheral implementation:
//!
//! - Hardware abstraction traits (bus master, control endpoint, bulk
//!   upload, fault log)
//! - Transaction executor with a bounded retry budget
//! - Transfer dispatcher (control payload → bus transaction → bulk
//!   staging)
//! - Bus configuration (bit-rate clamping, master reconfiguration)
//! - Shared board state
//!
//! Requests are handled one at a time to completion; the transfer
//! buffers and the bus are singletons whose single-owner-at-a-time
//! discipline is expressed through `&mut` borrows rather than locks.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod board;
pub mod config;
pub mod traits;
pub mod transfer;

#[cfg(test)]
pub(crate) mod mocks;
