//! USB transport traits
//!
//! The bridge moves data over two distinct USB paths: the control channel
//! carries small command payloads in, the bulk channel carries transaction
//! results out. Endpoint setup and DMA channel lifecycle belong to the
//! implementations.

/// Error reported by a transport operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The host-side link is gone or the endpoint stalled
    LinkDown,
    /// Data does not fit the channel's buffer
    Overflow,
}

/// Inbound control channel
pub trait ControlEndpoint {
    /// Pull one control payload into `buf`
    ///
    /// Returns the number of bytes actually received.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;
}

/// Outbound bulk channel
pub trait BulkUpload {
    /// Hand `data` to the outbound bulk path
    ///
    /// `data` is the valid prefix of the staging buffer; its length is the
    /// valid-byte count, never the buffer capacity.
    fn submit(&mut self, data: &[u8]) -> Result<(), TransportError>;
}
