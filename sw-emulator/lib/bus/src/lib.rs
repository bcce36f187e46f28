/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the FE8 host emulator bus library.

--*/
mod bus;
mod clock;
mod mem;
mod ram;
pub mod testing;

pub use crate::bus::{Bus, BusError};
pub use crate::clock::{Clock, Timer};
pub use crate::mem::{Mem, MemError};
pub use crate::ram::Ram;
