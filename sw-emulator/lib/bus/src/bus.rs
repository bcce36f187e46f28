/*++

Licensed under the Apache-2.0 license.

File Name:

    bus.rs

Abstract:

    File contains definition of the Bus trait.

--*/

use gbafe_types::{AccessSize, GbaAddr, SlotValue};
use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BusError {
    /// Load address misaligned
    LoadAddrMisaligned,

    /// Load access fault
    LoadAccessFault,

    /// Store address misaligned
    StoreAddrMisaligned,

    /// Store access fault
    StoreAccessFault,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            BusError::LoadAddrMisaligned => "load address misaligned",
            BusError::LoadAccessFault => "load access fault",
            BusError::StoreAddrMisaligned => "store address misaligned",
            BusError::StoreAccessFault => "store access fault",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for BusError {}

/// Represents an abstract memory bus. Used to read and write host memory
/// such as IWRAM.
pub trait Bus {
    /// Read data of specified size from given address
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the read
    /// * `addr` - Address to read from
    ///
    /// # Error
    ///
    /// * `BusError` - `BusError::LoadAccessFault` or `BusError::LoadAddrMisaligned`
    fn read(&self, size: AccessSize, addr: GbaAddr) -> Result<u32, BusError>;

    /// Write data of specified size to given address
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the write
    /// * `addr` - Address to write
    /// * `val` - Data to write
    ///
    /// # Error
    ///
    /// * `BusError` - `BusError::StoreAccessFault` or `BusError::StoreAddrMisaligned`
    fn write(&mut self, size: AccessSize, addr: GbaAddr, val: u32) -> Result<(), BusError>;

    /// Read consecutive words starting at `addr` into `out`.
    fn read_words(&self, addr: GbaAddr, out: &mut [SlotValue]) -> Result<(), BusError> {
        for (i, word) in out.iter_mut().enumerate() {
            let addr = addr
                .checked_add((i * 4) as GbaAddr)
                .ok_or(BusError::LoadAccessFault)?;
            *word = self.read(AccessSize::Word, addr)? as SlotValue;
        }
        Ok(())
    }

    /// Write the words in `words` consecutively starting at `addr`.
    fn write_words(&mut self, addr: GbaAddr, words: &[SlotValue]) -> Result<(), BusError> {
        for (i, word) in words.iter().enumerate() {
            let addr = addr
                .checked_add((i * 4) as GbaAddr)
                .ok_or(BusError::StoreAccessFault)?;
            self.write(AccessSize::Word, addr, *word as u32)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBus;

    #[test]
    fn test_read_words() {
        let mut fake_bus = FakeBus::new();
        fake_bus.read_result = Ok(0xffff_fffe);
        let mut words = [0; 2];
        assert_eq!(fake_bus.read_words(0x0300_04b8, &mut words), Ok(()));
        assert_eq!(words, [-2, -2]);
        assert_eq!(
            "read(AccessSize::Word, 0x30004b8)\nread(AccessSize::Word, 0x30004bc)\n",
            fake_bus.log.take()
        );
    }

    #[test]
    fn test_write_words() {
        let mut fake_bus = FakeBus::new();
        assert_eq!(fake_bus.write_words(0x100, &[1, -1]), Ok(()));
        assert_eq!(
            "write(AccessSize::Word, 0x100, 0x1)\nwrite(AccessSize::Word, 0x104, 0xffffffff)\n",
            fake_bus.log.take()
        );
    }

    #[test]
    fn test_words_stop_at_first_fault() {
        let mut fake_bus = FakeBus::new();
        fake_bus.write_result = Err(BusError::StoreAccessFault);
        assert_eq!(
            fake_bus.write_words(0x100, &[1, 2, 3]),
            Err(BusError::StoreAccessFault)
        );
        assert_eq!("write(AccessSize::Word, 0x100, 0x1)\n", fake_bus.log.take());
    }

    #[test]
    fn test_words_address_overflow() {
        let fake_bus = FakeBus::new();
        let mut words = [0; 2];
        assert_eq!(
            fake_bus.read_words(0xffff_fffc, &mut words),
            Err(BusError::LoadAccessFault)
        );
    }
}
