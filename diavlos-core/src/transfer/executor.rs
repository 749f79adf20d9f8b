//! Bus transaction execution with a bounded retry budget
//!
//! Recoverable bus errors (a NACK while the device is busy, arbitration
//! lost to a glitch) are retried until the attempt budget runs out;
//! timeouts and driver faults fail immediately. The budget counts total
//! attempts, so `retries = 3` means at most three transactions reach the
//! bus.

use diavlos_protocol::Preamble;

use crate::traits::bus::{BusErrorKind, I2cMaster};

/// Transaction failure surfaced after the retry budget is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusError {
    /// Error reported by the final attempt
    pub kind: BusErrorKind,
    /// Transaction attempts performed
    pub attempts: u32,
}

/// Read `len` bytes into `dest` using `preamble` for addressing
///
/// `len` must not exceed `dest.len()`; violating that is a programming
/// error and panics at the slice bound, it is never reported as a bus
/// error.
pub fn read<B: I2cMaster>(
    bus: &mut B,
    preamble: &Preamble,
    dest: &mut [u8],
    len: u32,
    timeout_ticks: u32,
    retries: u32,
) -> Result<(), BusError> {
    let dest = &mut dest[..len as usize];
    run(retries, || bus.read(preamble, &mut *dest, timeout_ticks))
}

/// Transmit the first `len` bytes of `src` using `preamble` for addressing
///
/// Same precondition as [`read`]: `len` must not exceed `src.len()`.
/// `src` is never modified, so a failed write leaves the control payload
/// intact.
pub fn write<B: I2cMaster>(
    bus: &mut B,
    preamble: &Preamble,
    src: &[u8],
    len: u32,
    timeout_ticks: u32,
    retries: u32,
) -> Result<(), BusError> {
    let src = &src[..len as usize];
    run(retries, || bus.write(preamble, src, timeout_ticks))
}

fn recoverable(kind: BusErrorKind) -> bool {
    matches!(kind, BusErrorKind::Nack | BusErrorKind::ArbitrationLost)
}

fn run(
    retries: u32,
    mut attempt: impl FnMut() -> Result<(), BusErrorKind>,
) -> Result<(), BusError> {
    // A zero budget still gets one attempt
    let budget = retries.max(1);
    let mut attempts = 0;

    loop {
        attempts += 1;
        match attempt() {
            Ok(()) => return Ok(()),
            Err(kind) if recoverable(kind) && attempts < budget => continue,
            Err(kind) => return Err(BusError { kind, attempts }),
        }
    }
}
