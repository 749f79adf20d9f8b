//! Per-request transfer pipeline
//!
//! One control request flows through parse → bus transaction → bulk
//! staging. The [`dispatcher`] orchestrates the pipeline; the
//! [`executor`] issues the bus transaction with a bounded retry budget.

pub mod dispatcher;
pub mod executor;

pub use dispatcher::{
    BridgeBuffers, BridgeError, Dispatcher, CONTROL_CAPACITY, STAGING_CAPACITY,
};
pub use executor::BusError;
