/*++

Licensed under the Apache-2.0 license.

File Name:

    tick.rs

Abstract:

    File contains the tick source abstraction used to read the game timer.

--*/

use gbafe_types::SlotValue;

/// Source of the host-maintained tick count (frames elapsed since the game
/// clock was started).
pub trait TickSource {
    /// Returns the current tick count. Must not have side effects beyond
    /// producing the value.
    fn ticks(&self) -> SlotValue;
}

impl<F> TickSource for F
where
    F: Fn() -> SlotValue,
{
    fn ticks(&self) -> SlotValue {
        self()
    }
}
