//! Hardware abstraction traits
//!
//! These traits define the interface between the bridge logic and the
//! hardware-specific collaborators: the I2C master peripheral, the USB
//! control/bulk transport, and the persistent fault log.

pub mod bus;
pub mod log;
pub mod transport;

pub use bus::{BusErrorKind, I2cMaster, MasterConfig, TransferMode};
pub use log::{Component, FaultLog, FaultRecord, MemoryFaultLog, NullFaultLog};
pub use transport::{BulkUpload, ControlEndpoint, TransportError};
