//! Shared board state
//!
//! Runtime-tunable bridge settings queried by the dispatcher and updated
//! by bus configuration and host commands. Persisting the state is an
//! external service; the snapshot helpers only produce and consume the
//! postcard byte image handed to it.

use crate::traits::bus::TransferMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Power-on bit rate in Hz
pub const DEFAULT_BIT_RATE: u32 = 400_000;

/// Power-on transaction attempt budget
pub const DEFAULT_RETRY_COUNT: u32 = 1;

/// Errors from board-state snapshot handling
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateError {
    /// Snapshot buffer too small
    Serialize,
    /// Snapshot bytes malformed
    Deserialize,
}

/// Shared bridge settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardState {
    i2c_bit_rate: u32,
    i2c_retry_count: u32,
    i2c_mode: TransferMode,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Conservative power-on settings
    pub const fn new() -> Self {
        Self {
            i2c_bit_rate: DEFAULT_BIT_RATE,
            i2c_retry_count: DEFAULT_RETRY_COUNT,
            i2c_mode: TransferMode::Buffered,
        }
    }

    /// Effective bus bit rate in Hz
    pub fn i2c_bit_rate(&self) -> u32 {
        self.i2c_bit_rate
    }

    /// Record the effective bit rate after a successful configuration
    pub fn set_i2c_bit_rate(&mut self, bit_rate: u32) {
        self.i2c_bit_rate = bit_rate;
    }

    /// Transaction attempt budget used by the dispatcher
    pub fn i2c_retry_count(&self) -> u32 {
        self.i2c_retry_count
    }

    /// Set the transaction attempt budget (host tunable)
    pub fn set_i2c_retry_count(&mut self, retries: u32) {
        self.i2c_retry_count = retries;
    }

    /// Configured transfer mode
    pub fn i2c_mode(&self) -> TransferMode {
        self.i2c_mode
    }

    /// Record the transfer mode after a successful configuration
    pub fn set_i2c_mode(&mut self, mode: TransferMode) {
        self.i2c_mode = mode;
    }

    /// Serialize this state into `buf` for the external storage service
    #[cfg(feature = "serde")]
    pub fn save<'a>(&self, buf: &'a mut [u8]) -> Result<&'a [u8], StateError> {
        postcard::to_slice(self, buf)
            .map(|written| &*written)
            .map_err(|_| StateError::Serialize)
    }

    /// Restore a state from a snapshot produced by [`save`](Self::save)
    #[cfg(feature = "serde")]
    pub fn load(bytes: &[u8]) -> Result<Self, StateError> {
        postcard::from_bytes(bytes).map_err(|_| StateError::Deserialize)
    }
}
