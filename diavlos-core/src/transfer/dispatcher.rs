//! Transfer dispatcher
//!
//! Orchestrates one control request to completion: pull the payload from
//! the control endpoint, parse it, run the bus transaction, and stage the
//! result for the outbound bulk path. Requests are strictly sequential;
//! the dispatcher borrows the shared [`BridgeBuffers`] for the duration
//! of a single request and nothing else may touch them meanwhile.

use diavlos_protocol::{RequestHeader, WireError};

use super::executor::{self, BusError};
use crate::board::BoardState;
use crate::config::{self, ConfigError};
use crate::traits::bus::{I2cMaster, TransferMode};
use crate::traits::log::{Component, FaultLog};
use crate::traits::transport::{BulkUpload, ControlEndpoint, TransportError};

/// Capacity of the control payload buffer
pub const CONTROL_CAPACITY: usize = 4096;

/// Capacity of the staging buffer handed to the bulk path
pub const STAGING_CAPACITY: usize = 4096;

/// The two shared transfer buffers, owned as one explicit handle
///
/// The buffers are reused across requests; stale bytes from a previous
/// transfer are only ever exposed up to the current request's valid
/// length. Intended to live in a single static owned by the request
/// loop.
pub struct BridgeBuffers {
    /// Incoming control payloads land here
    pub control: [u8; CONTROL_CAPACITY],
    /// Bus read results are staged here for upload
    pub staging: [u8; STAGING_CAPACITY],
}

impl BridgeBuffers {
    /// Zeroed buffers
    pub const fn new() -> Self {
        Self {
            control: [0; CONTROL_CAPACITY],
            staging: [0; STAGING_CAPACITY],
        }
    }
}

impl Default for BridgeBuffers {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure of one dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Request rejected during parsing; no bus activity occurred
    Request(WireError),
    /// Declared read length exceeds the staging buffer
    TransferTooLong { requested: u32, capacity: u32 },
    /// Bus transaction failed after retry exhaustion
    Bus(BusError),
    /// Control-endpoint receive failed
    Control(TransportError),
    /// Bulk staging hand-off failed
    Upload(TransportError),
}

impl From<WireError> for BridgeError {
    fn from(err: WireError) -> Self {
        BridgeError::Request(err)
    }
}

impl From<BusError> for BridgeError {
    fn from(err: BusError) -> Self {
        BridgeError::Bus(err)
    }
}

/// Per-request orchestrator over the hardware seams
pub struct Dispatcher<B, C, U, L> {
    bus: B,
    control: C,
    upload: U,
    log: L,
}

impl<B, C, U, L> Dispatcher<B, C, U, L>
where
    B: I2cMaster,
    C: ControlEndpoint,
    U: BulkUpload,
    L: FaultLog,
{
    /// Assemble a dispatcher from its collaborators
    pub fn new(bus: B, control: C, upload: U, log: L) -> Self {
        Self {
            bus,
            control,
            upload,
            log,
        }
    }

    /// Handle a host read request
    ///
    /// Pulls the control payload, reads `transfer_len` bytes from the bus
    /// and stages exactly that many bytes for upload - never the staging
    /// buffer's capacity. Returns the staged byte count.
    pub fn handle_read(
        &mut self,
        request_len: usize,
        buffers: &mut BridgeBuffers,
        state: &BoardState,
    ) -> Result<usize, BridgeError> {
        let header = self.receive_and_parse(request_len, buffers)?.0;

        let len = header.transfer_len;
        if len as usize > STAGING_CAPACITY {
            return Err(BridgeError::TransferTooLong {
                requested: len,
                capacity: STAGING_CAPACITY as u32,
            });
        }

        executor::read(
            &mut self.bus,
            &header.preamble,
            &mut buffers.staging,
            len,
            header.timeout_ticks,
            state.i2c_retry_count(),
        )?;

        let staged = &buffers.staging[..len as usize];
        self.upload.submit(staged).map_err(BridgeError::Upload)?;
        Ok(staged.len())
    }

    /// Handle a host write request
    ///
    /// The data to transmit sits inline in the control payload at the
    /// parsed data offset; it is written to the bus straight from the
    /// control buffer with no intermediate copy. The declared length is
    /// validated against the received payload before the slice is
    /// trusted.
    pub fn handle_write(
        &mut self,
        request_len: usize,
        buffers: &mut BridgeBuffers,
        state: &BoardState,
    ) -> Result<(), BridgeError> {
        let (header, data_offset, received) = self.receive_and_parse(request_len, buffers)?;

        let len = header.transfer_len as usize;
        let data_end = data_offset
            .checked_add(len)
            .ok_or(WireError::Truncated)?;
        if data_end > received {
            return Err(BridgeError::Request(WireError::Truncated));
        }

        let data = &buffers.control[data_offset..data_end];
        if let Err(err) = executor::write(
            &mut self.bus,
            &header.preamble,
            data,
            header.transfer_len,
            header.timeout_ticks,
            state.i2c_retry_count(),
        ) {
            self.log
                .record(Component::Dispatcher, "bus-write", err.kind.code());
            return Err(BridgeError::Bus(err));
        }

        Ok(())
    }

    /// Reconfigure the bus master, recording the effective settings
    ///
    /// See [`config::configure`].
    pub fn configure(
        &mut self,
        state: &mut BoardState,
        requested_bit_rate: u32,
        mode: TransferMode,
    ) -> Result<u32, ConfigError> {
        config::configure(&mut self.bus, &mut self.log, state, requested_bit_rate, mode)
    }

    /// Shared access to the bus driver
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Exclusive access to the bus driver
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Disassemble the dispatcher back into its collaborators
    pub fn into_parts(self) -> (B, C, U, L) {
        (self.bus, self.control, self.upload, self.log)
    }

    fn receive_and_parse(
        &mut self,
        request_len: usize,
        buffers: &mut BridgeBuffers,
    ) -> Result<(RequestHeader, usize, usize), BridgeError> {
        let want = request_len.min(CONTROL_CAPACITY);
        let received = self
            .control
            .receive(&mut buffers.control[..want])
            .map_err(BridgeError::Control)?;

        let (header, data_offset) = RequestHeader::parse(&buffers.control[..received])?;
        Ok((header, data_offset, received))
    }
}
