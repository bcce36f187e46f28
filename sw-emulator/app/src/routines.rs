/*++

Licensed under the Apache-2.0 license.

File Name:

    routines.rs

Abstract:

    File contains the table of native routines callable with ASMC.

--*/

use gbafe_asmc::{EventSlots, TickSource};
use std::fmt;

/// Native routine callable from an event script.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Routine {
    /// Sums s1..s4 into sC
    SumSlots,

    /// Stores the game time in sC
    GetTime,
}

/// Symbol names the routines are linked under. The tutorial scripts refer to
/// them by their older names as well.
const SYMBOLS: &[(&str, Routine)] = &[
    ("asmc_sum_slots", Routine::SumSlots),
    ("test_asmc", Routine::SumSlots),
    ("asmc_get_time", Routine::GetTime),
    ("some_asmc", Routine::GetTime),
];

impl Routine {
    /// Look up a routine by symbol name
    pub fn lookup(name: &str) -> Option<Routine> {
        SYMBOLS
            .iter()
            .find(|(symbol, _)| *symbol == name)
            .map(|(_, routine)| *routine)
    }

    /// Canonical symbol name
    pub fn symbol(self) -> &'static str {
        match self {
            Routine::SumSlots => "asmc_sum_slots",
            Routine::GetTime => "asmc_get_time",
        }
    }

    /// Run the routine to completion against the slot table.
    pub fn call(self, slots: &mut EventSlots, ticks: &impl TickSource) {
        match self {
            Routine::SumSlots => gbafe_asmc::asmc_sum_slots(slots),
            Routine::GetTime => gbafe_asmc::asmc_get_time(slots, ticks),
        }
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbafe_asmc::{Slot, SLOT_COUNT};

    #[test]
    fn test_lookup() {
        assert_eq!(Routine::lookup("asmc_sum_slots"), Some(Routine::SumSlots));
        assert_eq!(Routine::lookup("test_asmc"), Some(Routine::SumSlots));
        assert_eq!(Routine::lookup("asmc_get_time"), Some(Routine::GetTime));
        assert_eq!(Routine::lookup("some_asmc"), Some(Routine::GetTime));
        assert_eq!(Routine::lookup("Asmc_Sum_Slots"), None);
        assert_eq!(Routine::lookup(""), None);
    }

    #[test]
    fn test_symbol_resolves_to_itself() {
        for routine in [Routine::SumSlots, Routine::GetTime] {
            assert_eq!(Routine::lookup(routine.symbol()), Some(routine));
        }
    }

    #[test]
    fn test_call() {
        let mut table = [0; SLOT_COUNT];
        table[1..5].copy_from_slice(&[1, 2, 3, 4]);
        let mut slots = EventSlots::new(&mut table);

        Routine::SumSlots.call(&mut slots, &|| 0);
        assert_eq!(slots.get(Slot::SC), 10);

        Routine::GetTime.call(&mut slots, &|| 1500);
        assert_eq!(slots.get(Slot::SC), 1500);
    }
}
