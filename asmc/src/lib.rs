/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the FE8 ASMC routine library.

--*/

#![cfg_attr(not(test), no_std)]

mod entry;
pub mod hw;
pub mod memory_layout;
mod slots;
mod sum;
mod tick;

pub use entry::{asmc_get_time, asmc_sum_slots, fetch_and_store_time};
pub use gbafe_types::{Slot, SlotValue, SLOT_COUNT};
pub use slots::EventSlots;
pub use sum::sum_range;
pub use tick::TickSource;
