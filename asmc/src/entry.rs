/*++

Licensed under the Apache-2.0 license.

File Name:

    entry.rs

Abstract:

    File contains the ASMC routines invoked by the event engine. Each one
    runs to completion and communicates only through the slot table.

--*/

use crate::{sum_range, EventSlots, TickSource};
use gbafe_types::{Slot, SlotValue};

/// Sums event slots 1 through 4 and stores the result in slot C.
pub fn asmc_sum_slots(slots: &mut EventSlots) {
    let sum = sum_range(slots.range(Slot::S1, Some(Slot::S5)));
    slots.set(Slot::RESULT, sum);
}

/// Gets game time (in frames) and stores it to event slot C.
pub fn asmc_get_time(slots: &mut EventSlots, ticks: &impl TickSource) {
    fetch_and_store_time(slots.cell_mut(Slot::RESULT), ticks);
}

/// Reads the tick source once and writes the value verbatim into `cell`.
#[inline]
pub fn fetch_and_store_time(cell: &mut SlotValue, ticks: &impl TickSource) {
    *cell = ticks.ticks();
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use gbafe_types::SLOT_COUNT;

    fn table(operands: [SlotValue; 4]) -> [SlotValue; SLOT_COUNT] {
        let mut table = [0; SLOT_COUNT];
        table[1..5].copy_from_slice(&operands);
        table
    }

    #[test]
    fn test_sum_slots() {
        let mut table = table([1, 2, 3, 4]);
        asmc_sum_slots(&mut EventSlots::new(&mut table));
        assert_eq!(table[0xC], 10);
    }

    #[test]
    fn test_sum_slots_zero() {
        let mut table = table([0, 0, 0, 0]);
        table[0xC] = 99;
        asmc_sum_slots(&mut EventSlots::new(&mut table));
        assert_eq!(table[0xC], 0);
    }

    #[test]
    fn test_sum_slots_ignores_other_slots() {
        let mut table = table([1, 1, 1, 1]);
        table[0] = 100;
        table[5] = 100;
        table[0xD] = 100;
        asmc_sum_slots(&mut EventSlots::new(&mut table));
        assert_eq!(table[0xC], 4);
        assert_eq!(table[0xD], 100);
    }

    #[test]
    fn test_sum_slots_idempotent() {
        let mut table = table([3, -1, 8, 20]);
        asmc_sum_slots(&mut EventSlots::new(&mut table));
        let first = table;
        asmc_sum_slots(&mut EventSlots::new(&mut table));
        assert_eq!(table, first);
        assert_eq!(table[0xC], 30);
    }

    #[test]
    fn test_get_time() {
        let mut table = [0; SLOT_COUNT];
        asmc_get_time(&mut EventSlots::new(&mut table), &|| 1500);
        assert_eq!(table[0xC], 1500);
        assert_eq!(table.iter().filter(|v| **v != 0).count(), 1);
    }

    #[test]
    fn test_get_time_reads_once() {
        let calls = Cell::new(0);
        let source = || {
            calls.set(calls.get() + 1);
            -5
        };
        let mut cell = 0;
        fetch_and_store_time(&mut cell, &source);
        assert_eq!(cell, -5);
        assert_eq!(calls.get(), 1);
    }
}
