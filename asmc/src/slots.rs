/*++

Licensed under the Apache-2.0 license.

File Name:

    slots.rs

Abstract:

    File contains a borrowed view over the host event slot table.

--*/

use gbafe_types::{Slot, SlotValue, SLOT_COUNT};

/// Mutable view over the host-owned event slot table.
///
/// The table outlives the view; routines only read and write cells through
/// it and never change its shape.
pub struct EventSlots<'a> {
    slots: &'a mut [SlotValue; SLOT_COUNT],
}

impl<'a> EventSlots<'a> {
    /// Create a view over a full slot table
    pub fn new(slots: &'a mut [SlotValue; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Create a view over the first `SLOT_COUNT` cells of `cells`.
    ///
    /// Returns `None` if `cells` is too short to hold a slot table.
    pub fn from_slice(cells: &'a mut [SlotValue]) -> Option<Self> {
        let table = cells.get_mut(..SLOT_COUNT)?;
        let slots = <&mut [SlotValue; SLOT_COUNT]>::try_from(table).ok()?;
        Some(Self { slots })
    }

    #[inline]
    pub fn get(&self, slot: Slot) -> SlotValue {
        self.slots[slot.index()]
    }

    #[inline]
    pub fn set(&mut self, slot: Slot, val: SlotValue) {
        self.slots[slot.index()] = val;
    }

    /// Mutable reference to a single slot
    #[inline]
    pub fn cell_mut(&mut self, slot: Slot) -> &mut SlotValue {
        &mut self.slots[slot.index()]
    }

    /// Half-open range `[begin, end)` of slot values.
    ///
    /// `end` must not precede `begin`. Pass `None` as `end` to run through
    /// the last slot.
    pub fn range(&self, begin: Slot, end: Option<Slot>) -> &[SlotValue] {
        let end = end.map_or(SLOT_COUNT, Slot::index);
        &self.slots[begin.index()..end]
    }

    pub fn as_slice(&self) -> &[SlotValue] {
        self.slots
    }
}
