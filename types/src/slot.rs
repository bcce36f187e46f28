/*++

Licensed under the Apache-2.0 license.

File Name:

    slot.rs

Abstract:

    File contains the event slot identifiers.

--*/
use core::fmt;

/// Number of event slots in the host slot table (s0 through sD).
pub const SLOT_COUNT: usize = 0xE;

/// Event slot identifier.
///
/// Slots s1 through sA are general purpose. sB holds a packed map position,
/// sC is the result slot read back by conditional and arithmetic event
/// instructions, and sD is the event queue size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Slot {
    S0 = 0x0,
    S1 = 0x1,
    S2 = 0x2,
    S3 = 0x3,
    S4 = 0x4,
    S5 = 0x5,
    S6 = 0x6,
    S7 = 0x7,
    S8 = 0x8,
    S9 = 0x9,
    SA = 0xA,
    SB = 0xB,
    SC = 0xC,
    SD = 0xD,
}

impl Slot {
    /// Alias for sB
    pub const POSITION: Slot = Slot::SB;

    /// Alias for sC
    pub const RESULT: Slot = Slot::SC;

    /// Alias for sD
    pub const QUEUE_SIZE: Slot = Slot::SD;

    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::S0,
        Slot::S1,
        Slot::S2,
        Slot::S3,
        Slot::S4,
        Slot::S5,
        Slot::S6,
        Slot::S7,
        Slot::S8,
        Slot::S9,
        Slot::SA,
        Slot::SB,
        Slot::SC,
        Slot::SD,
    ];

    /// Index of this slot in the slot table
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Byte offset of this slot from the start of the slot table
    #[inline]
    pub const fn offset(self) -> u32 {
        (self as u32) * 4
    }
}

/// Returned when converting an out-of-range index into a [`Slot`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidSlot(pub usize);

impl fmt::Display for InvalidSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid event slot 0x{:x}", self.0)
    }
}

impl TryFrom<usize> for Slot {
    type Error = InvalidSlot;

    fn try_from(val: usize) -> Result<Self, Self::Error> {
        Slot::ALL.get(val).copied().ok_or(InvalidSlot(val))
    }
}

impl From<Slot> for usize {
    fn from(slot: Slot) -> usize {
        slot.index()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{:X}", *self as u8)
    }
}
