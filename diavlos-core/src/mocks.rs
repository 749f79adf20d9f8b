//! Test doubles for the hardware seams

use heapless::Vec;

use diavlos_protocol::Preamble;

use crate::traits::bus::{BusErrorKind, I2cMaster, MasterConfig};
use crate::traits::transport::{BulkUpload, ControlEndpoint, TransportError};
use crate::transfer::{CONTROL_CAPACITY, STAGING_CAPACITY};

/// Bus driver whose attempt outcomes follow a pre-loaded script
///
/// Scripted errors are consumed one per attempt; once the script runs
/// out, attempts succeed. Successful reads fill the destination with
/// `fill`.
pub struct ScriptedBus {
    script_queue: Vec<BusErrorKind, 8>,
    next: usize,
    /// Byte pattern written into read destinations
    pub fill: u8,
    pub read_attempts: usize,
    pub write_attempts: usize,
    pub last_read_len: Option<usize>,
    pub last_write: Vec<u8, 128>,
    pub init_calls: usize,
    pub deinit_calls: usize,
    pub init_result: Result<(), BusErrorKind>,
    pub set_config_result: Result<(), BusErrorKind>,
    pub last_config: Option<MasterConfig>,
}

impl ScriptedBus {
    pub fn new() -> Self {
        Self {
            script_queue: Vec::new(),
            next: 0,
            fill: 0,
            read_attempts: 0,
            write_attempts: 0,
            last_read_len: None,
            last_write: Vec::new(),
            init_calls: 0,
            deinit_calls: 0,
            init_result: Ok(()),
            set_config_result: Ok(()),
            last_config: None,
        }
    }

    /// Queue attempt outcomes; each listed error fails one attempt
    pub fn script(&mut self, errors: &[BusErrorKind]) {
        self.script_queue = Vec::from_slice(errors).unwrap();
        self.next = 0;
    }

    fn next_outcome(&mut self) -> Result<(), BusErrorKind> {
        match self.script_queue.get(self.next) {
            Some(&kind) => {
                self.next += 1;
                Err(kind)
            }
            None => Ok(()),
        }
    }
}

impl I2cMaster for ScriptedBus {
    fn init(&mut self) -> Result<(), BusErrorKind> {
        self.init_calls += 1;
        self.init_result
    }

    fn deinit(&mut self) {
        self.deinit_calls += 1;
    }

    fn set_config(&mut self, config: &MasterConfig) -> Result<(), BusErrorKind> {
        self.set_config_result?;
        self.last_config = Some(*config);
        Ok(())
    }

    fn read(
        &mut self,
        _preamble: &Preamble,
        dest: &mut [u8],
        _timeout_ticks: u32,
    ) -> Result<(), BusErrorKind> {
        self.read_attempts += 1;
        self.next_outcome()?;
        dest.fill(self.fill);
        self.last_read_len = Some(dest.len());
        Ok(())
    }

    fn write(
        &mut self,
        _preamble: &Preamble,
        src: &[u8],
        _timeout_ticks: u32,
    ) -> Result<(), BusErrorKind> {
        self.write_attempts += 1;
        self.next_outcome()?;
        self.last_write = Vec::from_slice(src).unwrap();
        Ok(())
    }
}

/// Control endpoint that serves a pre-loaded payload
pub struct ScriptedControl {
    payload: Vec<u8, CONTROL_CAPACITY>,
    pub fail: Option<TransportError>,
}

impl ScriptedControl {
    pub fn new() -> Self {
        Self {
            payload: Vec::new(),
            fail: None,
        }
    }

    pub fn preload(&mut self, payload: &[u8]) {
        self.payload = Vec::from_slice(payload).unwrap();
    }
}

impl ControlEndpoint for ScriptedControl {
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        if let Some(err) = self.fail {
            return Err(err);
        }
        let n = self.payload.len().min(buf.len());
        buf[..n].copy_from_slice(&self.payload[..n]);
        Ok(n)
    }
}

/// Bulk path that captures what was staged for upload
pub struct CapturingUpload {
    pub submissions: usize,
    pub last_submitted: Vec<u8, STAGING_CAPACITY>,
    pub fail: Option<TransportError>,
}

impl CapturingUpload {
    pub fn new() -> Self {
        Self {
            submissions: 0,
            last_submitted: Vec::new(),
            fail: None,
        }
    }
}

impl BulkUpload for CapturingUpload {
    fn submit(&mut self, data: &[u8]) -> Result<(), TransportError> {
        if let Some(err) = self.fail {
            return Err(err);
        }
        self.submissions += 1;
        self.last_submitted = Vec::from_slice(data).map_err(|_| TransportError::Overflow)?;
        Ok(())
    }
}
