//! Null (not-connected) device.
//!
//! Occupies unmapped address ranges so a transfer aimed there still completes. The device
//! is always ready and always answers OKAY; writes are dropped and reads return zero.

use tracing::trace;

use crate::soc::signals::{BusSignals, Response};
use crate::soc::traits::BusDevice;

/// Sink device for address ranges with nothing behind them.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDevice;

impl BusDevice for NullDevice {
    fn write(&mut self, _addr: u32, _value: u32) {}

    fn read(&mut self, _addr: u32) -> u32 {
        0
    }

    fn evaluate(&mut self, bus: BusSignals<'_>) {
        if bus.is_transfer() {
            trace!(
                addr = format_args!("{:#010x}", bus.addr),
                write = bus.write,
                "null device transfer"
            );
        }
        *bus.ready = true;
        *bus.response = Response::Okay;
    }
}
