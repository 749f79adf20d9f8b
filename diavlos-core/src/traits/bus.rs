//! I2C master driver trait
//!
//! The bridge consumes the bus through this seam; chip-specific drivers
//! implement it. Each call is a single transaction attempt - the retry
//! budget lives in the transaction executor.

use diavlos_protocol::Preamble;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error reported by the bus driver for a single transaction attempt
///
/// Discriminants are stable and double as fault-log error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusErrorKind {
    /// Address or data byte not acknowledged
    Nack = 1,
    /// Lost arbitration to another master
    ArbitrationLost = 2,
    /// Transfer timed out
    Timeout = 3,
    /// Any other driver-reported failure
    Other = 4,
}

impl BusErrorKind {
    /// Numeric code for the fault log
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Transfer mode for the master block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransferMode {
    /// Register-based transfers through the peripheral FIFO
    #[default]
    Buffered,
    /// DMA-backed streaming transfers
    Streaming,
}

/// Master block configuration applied on (re)initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MasterConfig {
    /// SCL frequency in Hz
    pub bit_rate: u32,
    /// Bus-level timeout in driver ticks
    pub bus_timeout: u32,
    /// DMA completion timeout in driver ticks
    pub dma_timeout: u16,
    /// Transfer mode
    pub mode: TransferMode,
}

/// I2C bus master
///
/// `read`/`write` issue one transaction attempt and block until the
/// hardware transfer completes, fails, or times out per `timeout_ticks`.
/// There is no cancellation path once a transaction has been issued.
pub trait I2cMaster {
    /// Initialize the master block
    fn init(&mut self) -> Result<(), BusErrorKind>;

    /// De-initialize the master block
    ///
    /// Safe to call when the block was never initialized.
    fn deinit(&mut self);

    /// Apply a configuration to an initialized master block
    fn set_config(&mut self, config: &MasterConfig) -> Result<(), BusErrorKind>;

    /// Read `dest.len()` bytes using `preamble` for addressing
    fn read(
        &mut self,
        preamble: &Preamble,
        dest: &mut [u8],
        timeout_ticks: u32,
    ) -> Result<(), BusErrorKind>;

    /// Transmit `src` using `preamble` for addressing
    fn write(
        &mut self,
        preamble: &Preamble,
        src: &[u8],
        timeout_ticks: u32,
    ) -> Result<(), BusErrorKind>;
}
