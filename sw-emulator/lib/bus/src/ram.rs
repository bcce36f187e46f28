/*++

Licensed under the Apache-2.0 license.

File Name:

    ram.rs

Abstract:

    File contains implementation of RAM mapped at a fixed base address.

--*/

use crate::{mem::Mem, Bus, BusError, MemError};
use gbafe_types::{AccessSize, GbaAddr};

/// Random Access Memory Device
pub struct Ram {
    /// Address of the first byte
    base: GbaAddr,

    /// Data
    data: Mem,
}

impl Ram {
    /// Create new zero-filled RAM
    ///
    /// # Arguments
    ///
    /// * `base` - Bus address the RAM is mapped at
    /// * `size` - Size in bytes
    pub fn new(base: GbaAddr, size: usize) -> Self {
        Self::with_data(base, vec![0; size])
    }

    /// Create new RAM with the given initial contents
    pub fn with_data(base: GbaAddr, data: Vec<u8>) -> Self {
        Self {
            base,
            data: Mem::new(data),
        }
    }

    pub fn base(&self) -> GbaAddr {
        self.base
    }

    pub fn mmap_size(&self) -> GbaAddr {
        self.data.len() as GbaAddr
    }

    pub fn data(&self) -> &[u8] {
        self.data.data()
    }

    #[inline]
    fn offset(&self, addr: GbaAddr) -> Option<usize> {
        addr.checked_sub(self.base).map(|offset| offset as usize)
    }
}

impl Bus for Ram {
    fn read(&self, size: AccessSize, addr: GbaAddr) -> Result<u32, BusError> {
        let offset = self.offset(addr).ok_or(MemError::ReadAccessFault)?;
        Ok(self.data.read_aligned(size, offset)?)
    }

    fn write(&mut self, size: AccessSize, addr: GbaAddr, val: u32) -> Result<(), BusError> {
        let offset = self.offset(addr).ok_or(MemError::WriteAccessFault)?;
        Ok(self.data.write_aligned(size, offset, val)?)
    }
}
