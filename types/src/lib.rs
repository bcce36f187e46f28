/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains the value, address and slot types shared by the ASMC
    routines and the host emulator.

--*/
#![cfg_attr(not(test), no_std)]

mod macros;
mod slot;

pub use crate::slot::{InvalidSlot, Slot, SLOT_COUNT};

/// Contents of a single event slot. The host declares the slot table as
/// `int`, so values are signed 32-bit.
pub type SlotValue = i32;

/// GBA bus address
pub type GbaAddr = u32;

gbafe_enum!(
    /// GBA bus access width
    #[derive(Debug, Eq, PartialEq, Copy, Clone)]
    pub AccessSize;
    usize;
    {
        Byte = 1,
        HalfWord = 2,
        Word = 4,
    };
    Invalid
);
