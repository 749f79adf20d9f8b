//! Bus master (re)configuration
//!
//! Reconfiguration tears the master block down and brings it back up with
//! the requested bit rate clamped into the supported window. The effective
//! rate is persisted into [`BoardState`] only once the whole sequence has
//! succeeded, so a failed attempt leaves the recorded settings describing
//! the last working configuration.

use crate::board::BoardState;
use crate::traits::bus::{BusErrorKind, I2cMaster, MasterConfig, TransferMode};
use crate::traits::log::{Component, FaultLog};

/// Slowest supported bit rate (standard mode)
pub const MIN_BIT_RATE: u32 = 100_000;

/// Fastest supported bit rate (fast mode plus)
pub const MAX_BIT_RATE: u32 = 1_000_000;

/// Bus-level timeout applied on configuration; transactions are bounded
/// by the per-request timeout instead
pub const BUS_TIMEOUT: u32 = u32::MAX;

/// DMA completion timeout applied on configuration
pub const DMA_TIMEOUT: u16 = 0xFFFF;

/// Bus (re)configuration failure
///
/// Either way the master block is left de-initialized or in its failed
/// init state; the caller reports the failure rather than retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The master block failed to initialize
    InitFailed(BusErrorKind),
    /// Initialization succeeded but the configuration was rejected
    ApplyFailed(BusErrorKind),
}

/// Clamp a requested bit rate into the supported window
pub fn clamp_bit_rate(requested: u32) -> u32 {
    requested.clamp(MIN_BIT_RATE, MAX_BIT_RATE)
}

/// Tear down and reconfigure the bus master
///
/// On success the effective (clamped) bit rate and mode are recorded in
/// `state` and the rate is returned. No internal retry on failure.
pub fn configure<B: I2cMaster, L: FaultLog>(
    bus: &mut B,
    log: &mut L,
    state: &mut BoardState,
    requested_bit_rate: u32,
    mode: TransferMode,
) -> Result<u32, ConfigError> {
    let bit_rate = clamp_bit_rate(requested_bit_rate);

    bus.deinit();
    if let Err(kind) = bus.init() {
        // The fault log may itself sit behind this bus; best effort only
        log.record(Component::BusConfig, "init", kind.code());
        return Err(ConfigError::InitFailed(kind));
    }

    let config = MasterConfig {
        bit_rate,
        bus_timeout: BUS_TIMEOUT,
        dma_timeout: DMA_TIMEOUT,
        mode,
    };
    bus.set_config(&config).map_err(ConfigError::ApplyFailed)?;

    state.set_i2c_bit_rate(bit_rate);
    state.set_i2c_mode(mode);
    Ok(bit_rate)
}
