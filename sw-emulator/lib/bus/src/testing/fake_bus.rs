/*++

Licensed under the Apache-2.0 license.

File Name:

    fake_bus.rs

Abstract:

    File contains code for a fake implementation of the Bus trait.

--*/
use gbafe_types::{AccessSize, GbaAddr};

use crate::{testing::Log, Bus, BusError};

/// A Bus implementation that logs all calls, and allows the user to override
/// the return value of the methods.
///
/// # Example
///
/// ```
/// use gbafe_emu_bus::{Bus, testing::FakeBus};
/// use gbafe_types::AccessSize;
///
/// let mut fake_bus = FakeBus::new();
/// fake_bus.read_result = Ok(35);
/// assert_eq!(fake_bus.read(AccessSize::HalfWord, 0x030004b8), Ok(35));
/// assert_eq!("read(AccessSize::HalfWord, 0x30004b8)\n", fake_bus.log.take());
/// ```
pub struct FakeBus {
    pub log: Log,
    pub read_result: Result<u32, BusError>,
    pub write_result: Result<(), BusError>,
}

impl FakeBus {
    pub fn new() -> Self {
        Self {
            log: Log::new(),
            read_result: Ok(0),
            write_result: Ok(()),
        }
    }
}

impl Default for FakeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for FakeBus {
    fn read(&self, size: AccessSize, addr: GbaAddr) -> Result<u32, BusError> {
        self.log
            .push(format_args!("read(AccessSize::{size:?}, {addr:#x})"));
        self.read_result
    }

    fn write(&mut self, size: AccessSize, addr: GbaAddr, val: u32) -> Result<(), BusError> {
        self.log
            .push(format_args!("write(AccessSize::{size:?}, {addr:#x}, {val:#x})"));
        self.write_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_bus() {
        let mut fake_bus = FakeBus::new();

        assert_eq!(fake_bus.read(AccessSize::HalfWord, 0x030004c4), Ok(0));
        assert_eq!("read(AccessSize::HalfWord, 0x30004c4)\n", fake_bus.log.take());

        fake_bus.read_result = Err(BusError::LoadAccessFault);
        assert_eq!(
            fake_bus.read(AccessSize::Byte, 0x12345678),
            Err(BusError::LoadAccessFault)
        );
        assert_eq!("read(AccessSize::Byte, 0x12345678)\n", fake_bus.log.take());

        fake_bus.write_result = Err(BusError::StoreAddrMisaligned);
        assert_eq!(
            fake_bus.write(AccessSize::Word, 0x131, 0x1),
            Err(BusError::StoreAddrMisaligned)
        );
        assert_eq!("write(AccessSize::Word, 0x131, 0x1)\n", fake_bus.log.take());
    }
}
