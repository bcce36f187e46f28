/*++

Licensed under the Apache-2.0 license.

File Name:

    mem.rs

Abstract:

    File contains the little-endian byte store backing emulated RAM.

--*/

use crate::BusError;
use gbafe_types::AccessSize;

/// Memory Exception
#[derive(Debug, PartialEq, Eq)]
pub enum MemError {
    /// Read Address misaligned
    ReadAddrMisaligned,

    /// Read Access fault
    ReadAccessFault,

    /// Write Address misaligned
    WriteAddrMisaligned,

    /// Write access fault
    WriteAccessFault,
}

impl From<MemError> for BusError {
    /// Converts to this type from the input type.
    fn from(exception: MemError) -> BusError {
        match exception {
            MemError::ReadAddrMisaligned => BusError::LoadAddrMisaligned,
            MemError::ReadAccessFault => BusError::LoadAccessFault,
            MemError::WriteAddrMisaligned => BusError::StoreAddrMisaligned,
            MemError::WriteAccessFault => BusError::StoreAccessFault,
        }
    }
}

/// Memory
pub struct Mem {
    /// Data storage
    data: Vec<u8>,
}

impl Mem {
    /// Create a new memory object
    ///
    /// # Arguments
    ///
    /// * `data` - Data contents for memory
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Size of the memory in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Immutable reference to data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable reference to data
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Read data of specified size from given offset. The offset must be
    /// `size` aligned, as on the GBA bus.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the read
    /// * `offset` - Byte offset to read from
    ///
    /// # Error
    ///
    /// * `MemError::ReadAddrMisaligned` - Offset is not `size` aligned
    /// * `MemError::ReadAccessFault` - Read outside of memory or of invalid size
    pub fn read_aligned(&self, size: AccessSize, offset: usize) -> Result<u32, MemError> {
        let width = size.value().ok_or(MemError::ReadAccessFault)?;
        let bytes = self.bytes(offset, width).ok_or(MemError::ReadAccessFault)?;
        if offset & (width - 1) != 0 {
            return Err(MemError::ReadAddrMisaligned);
        }
        let mut word = [0u8; 4];
        word[..width].copy_from_slice(bytes);
        Ok(u32::from_le_bytes(word))
    }

    /// Write the low `size` bytes of `val` to given offset. The offset must be
    /// `size` aligned.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the write
    /// * `offset` - Byte offset to write
    /// * `val` - Data to write
    ///
    /// # Error
    ///
    /// * `MemError::WriteAddrMisaligned` - Offset is not `size` aligned
    /// * `MemError::WriteAccessFault` - Write outside of memory or of invalid size
    pub fn write_aligned(
        &mut self,
        size: AccessSize,
        offset: usize,
        val: u32,
    ) -> Result<(), MemError> {
        let width = size.value().ok_or(MemError::WriteAccessFault)?;
        if self.bytes(offset, width).is_none() {
            return Err(MemError::WriteAccessFault);
        }
        if offset & (width - 1) != 0 {
            return Err(MemError::WriteAddrMisaligned);
        }
        self.data[offset..offset + width].copy_from_slice(&val.to_le_bytes()[..width]);
        Ok(())
    }

    #[inline]
    fn bytes(&self, offset: usize, width: usize) -> Option<&[u8]> {
        self.data.get(offset..offset.checked_add(width)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        // Test zero sized memory
        let mem = Mem::new(Vec::new());
        assert!(mem.is_empty());

        let mem = Mem::new(vec![1, 2, 3]);
        assert_eq!(mem.len(), 3);
    }

    #[test]
    fn test_read() {
        let mem = Mem::new(vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(mem.read_aligned(AccessSize::Byte, 3), Ok(4));
        assert_eq!(mem.read_aligned(AccessSize::HalfWord, 2), Ok(0x0403));
        assert_eq!(mem.read_aligned(AccessSize::Word, 4), Ok(0x08070605));
    }

    #[test]
    fn test_read_misaligned() {
        let mem = Mem::new(vec![0; 8]);
        assert_eq!(
            mem.read_aligned(AccessSize::HalfWord, 1),
            Err(MemError::ReadAddrMisaligned)
        );
        assert_eq!(
            mem.read_aligned(AccessSize::Word, 2),
            Err(MemError::ReadAddrMisaligned)
        );
    }

    #[test]
    fn test_read_fault() {
        let mem = Mem::new(vec![0; 8]);
        assert_eq!(
            mem.read_aligned(AccessSize::Word, 8),
            Err(MemError::ReadAccessFault)
        );
        assert_eq!(
            mem.read_aligned(AccessSize::Byte, usize::MAX),
            Err(MemError::ReadAccessFault)
        );
        assert_eq!(
            mem.read_aligned(AccessSize::Invalid, 0),
            Err(MemError::ReadAccessFault)
        );
    }

    #[test]
    fn test_write() {
        let mut mem = Mem::new(vec![0; 8]);
        assert_eq!(mem.write_aligned(AccessSize::Word, 4, 0xCAFEBABE), Ok(()));
        assert_eq!(mem.write_aligned(AccessSize::HalfWord, 2, 0x1234_5678), Ok(()));
        assert_eq!(mem.write_aligned(AccessSize::Byte, 1, 0xAB), Ok(()));
        assert_eq!(mem.data(), &[0, 0xAB, 0x78, 0x56, 0xBE, 0xBA, 0xFE, 0xCA]);
    }

    #[test]
    fn test_write_errors() {
        let mut mem = Mem::new(vec![0; 8]);
        assert_eq!(
            mem.write_aligned(AccessSize::Word, 6, 0),
            Err(MemError::WriteAccessFault)
        );
        assert_eq!(
            mem.write_aligned(AccessSize::Word, 2, 0),
            Err(MemError::WriteAddrMisaligned)
        );
        assert_eq!(
            mem.write_aligned(AccessSize::Invalid, 0, 0),
            Err(MemError::WriteAccessFault)
        );
        assert_eq!(mem.data(), &[0; 8]);
    }

    #[test]
    fn test_data_mut() {
        let mut mem = Mem::new(vec![0; 4]);
        mem.data_mut()[0] = 0x7f;
        assert_eq!(mem.read_aligned(AccessSize::Word, 0), Ok(0x7f));
    }
}
