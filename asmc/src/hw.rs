/*++

Licensed under the Apache-2.0 license.

File Name:

    hw.rs

Abstract:

    File contains bindings to the game's own slot table and timer routine
    at their fixed FE8U addresses.

--*/

use crate::memory_layout::{EVENT_SLOT_ORG, GET_GAME_TIME_ADDR};
use crate::{EventSlots, TickSource};
use gbafe_types::{SlotValue, SLOT_COUNT};

/// Signature of the game's `GetGameTime` routine
pub type GetGameTimeFn = extern "C" fn() -> SlotValue;

/// The game's own timer routine, called through a function pointer.
#[derive(Copy, Clone)]
pub struct GameTime {
    func: GetGameTimeFn,
}

impl GameTime {
    /// Bind to the routine at `addr`.
    ///
    /// # Safety
    ///
    /// `addr` must be the entry point of a routine with the `GetGameTimeFn`
    /// signature, with the thumb bit set if the routine is THUMB code.
    pub unsafe fn from_addr(addr: usize) -> Self {
        Self {
            func: core::mem::transmute::<usize, GetGameTimeFn>(addr),
        }
    }

    /// Bind to `GetGameTime` in the FE8U ROM.
    ///
    /// # Safety
    ///
    /// Must only be called from code running inside FE8U.
    pub unsafe fn fe8u() -> Self {
        Self::from_addr(GET_GAME_TIME_ADDR as usize)
    }
}

impl From<GetGameTimeFn> for GameTime {
    fn from(func: GetGameTimeFn) -> Self {
        Self { func }
    }
}

impl TickSource for GameTime {
    fn ticks(&self) -> SlotValue {
        (self.func)()
    }
}

/// The game's event slot table.
///
/// # Safety
///
/// Must only be called from code running inside FE8U, while the event
/// engine has handed control to an ASMC. No other view of the table may be
/// alive at the same time.
pub unsafe fn event_slots() -> EventSlots<'static> {
    EventSlots::new(&mut *(EVENT_SLOT_ORG as usize as *mut [SlotValue; SLOT_COUNT]))
}

#[cfg(feature = "fe8u")]
mod exports {
    use super::{event_slots, GameTime};

    #[no_mangle]
    pub extern "C" fn asmc_sum_slots() {
        // SAFETY: only reachable through the ASMC event instruction.
        let mut slots = unsafe { event_slots() };
        crate::asmc_sum_slots(&mut slots);
    }

    #[no_mangle]
    pub extern "C" fn asmc_get_time() {
        // SAFETY: only reachable through the ASMC event instruction.
        let (mut slots, time) = unsafe { (event_slots(), GameTime::fe8u()) };
        crate::asmc_get_time(&mut slots, &time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "C" fn fake_game_time() -> SlotValue {
        1500
    }

    #[test]
    fn test_game_time_from_fn() {
        let time = GameTime::from(fake_game_time as GetGameTimeFn);
        assert_eq!(time.ticks(), 1500);
    }

    #[test]
    fn test_game_time_from_addr() {
        let addr = fake_game_time as GetGameTimeFn as usize;
        let time = unsafe { GameTime::from_addr(addr) };
        assert_eq!(time.ticks(), 1500);
    }

    #[cfg(feature = "fe8u")]
    #[test]
    fn test_exports_are_asmc_entry_points() {
        let entries: [extern "C" fn(); 2] = [super::exports::asmc_sum_slots, super::exports::asmc_get_time];
        assert_ne!(entries[0] as usize, entries[1] as usize);
    }
}
