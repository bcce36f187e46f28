/*++

Licensed under the Apache-2.0 license.

File Name:

    clock.rs

Abstract:

    File contains the Clock and Timer types, which model the host's frame
    counter backing `GetGameTime`.

--*/
use std::{cell::Cell, rc::Rc};

use gbafe_asmc::TickSource;
use gbafe_types::SlotValue;

/// Read-only handle to a [`Clock`]. Routines that need the game time hold a
/// `Timer`, while the owner of the `Clock` advances it.
///
/// # Example
///
/// ```
/// use gbafe_asmc::TickSource;
/// use gbafe_emu_bus::Clock;
///
/// let clock = Clock::new();
/// let timer = clock.timer();
/// clock.increment(1500);
/// assert_eq!(timer.ticks(), 1500);
/// ```
#[derive(Clone)]
pub struct Timer {
    now: Rc<Cell<u64>>,
}

impl Timer {
    /// Constructs a new timer bound to the specified clock.
    pub fn new(clock: &Clock) -> Self {
        Self {
            now: Rc::clone(&clock.now),
        }
    }

    /// Returns the number of frames that have elapsed since the clock
    /// started.
    #[inline]
    pub fn now(&self) -> u64 {
        self.now.get()
    }
}

impl TickSource for Timer {
    /// The game keeps a 32-bit frame counter; only its low bits are visible.
    fn ticks(&self) -> SlotValue {
        self.now() as u32 as SlotValue
    }
}

pub struct Clock {
    now: Rc<Cell<u64>>,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Constructs a new Clock with the frame counter set to 0.
    pub fn new() -> Clock {
        Self::starting_at(0)
    }

    /// Constructs a new Clock with the frame counter set to `frames`.
    pub fn starting_at(frames: u64) -> Clock {
        Self {
            now: Rc::new(Cell::new(frames)),
        }
    }

    /// Constructs a `Timer` associated with this clock.
    pub fn timer(&self) -> Timer {
        Timer::new(self)
    }

    /// Returns the number of frames that have elapsed since the clock
    /// started.
    #[inline]
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Increments the clock by `delta` frames and returns the new time.
    #[inline]
    pub fn increment(&self, delta: u64) -> u64 {
        let now = self.now.get().wrapping_add(delta);
        self.now.set(now);
        now
    }
}

impl TickSource for Clock {
    fn ticks(&self) -> SlotValue {
        self.timer().ticks()
    }
}
