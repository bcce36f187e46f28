/*++
Licensed under the Apache-2.0 license.

File Name:

    memory_layout.rs

Abstract:

    The file contains the FE8U addresses the ASMC routines are bound to.

--*/

//
// Memory Addresses
//
pub const ROM_ORG: u32 = 0x08000000;
pub const EWRAM_ORG: u32 = 0x02000000;
pub const IWRAM_ORG: u32 = 0x03000000;
pub const EVENT_SLOT_ORG: u32 = 0x030004B8;

//
// Routine Addresses
//
/// `GetGameTime`, a THUMB routine; bit 0 is the thumb bit.
pub const GET_GAME_TIME_ADDR: u32 = 0x08000D29;

//
// Memory Sizes In Bytes
//
pub const EWRAM_SIZE: u32 = 0x40000;
pub const IWRAM_SIZE: u32 = 0x8000;
pub const EVENT_SLOT_SIZE: u32 = (gbafe_types::SLOT_COUNT * 4) as u32;

#[test]
#[allow(clippy::assertions_on_constants)]
fn test_event_slots_in_iwram() {
    assert_eq!(EVENT_SLOT_ORG & 3, 0);
    assert!(EVENT_SLOT_ORG >= IWRAM_ORG);
    assert!(EVENT_SLOT_ORG + EVENT_SLOT_SIZE <= IWRAM_ORG + IWRAM_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn test_work_ram_regions_disjoint() {
    assert!(EWRAM_ORG + EWRAM_SIZE <= IWRAM_ORG);
    assert!(IWRAM_ORG + IWRAM_SIZE <= ROM_ORG);
    assert!(!(EWRAM_ORG..EWRAM_ORG + EWRAM_SIZE).contains(&EVENT_SLOT_ORG));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn test_game_time_is_thumb_rom_routine() {
    assert_eq!(GET_GAME_TIME_ADDR & 1, 1);
    assert!(GET_GAME_TIME_ADDR >= ROM_ORG);
}
