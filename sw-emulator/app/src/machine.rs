/*++

Licensed under the Apache-2.0 license.

File Name:

    machine.rs

Abstract:

    File contains the emulated host: IWRAM holding the event slot table,
    the game clock, and the party state touched by event instructions.

--*/

use crate::routines::Routine;
use crate::script::{Instruction, ScriptError, Statement};
use gbafe_asmc::memory_layout::{EVENT_SLOT_ORG, IWRAM_ORG, IWRAM_SIZE};
use gbafe_asmc::EventSlots;
use gbafe_emu_bus::{Bus, BusError, Clock, Ram};
use gbafe_types::{AccessSize, Slot, SlotValue, SLOT_COUNT};
use log::{debug, info};

/// The game caps party gold at this amount.
pub const GOLD_MAX: SlotValue = 999_999;

/// An item handed to a unit by `GIVEITEMTOMAIN`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ItemGift {
    pub character: u16,
    pub item: SlotValue,
}

pub struct Machine {
    iwram: Ram,
    clock: Clock,
    gold: SlotValue,
    gifts: Vec<ItemGift>,
}

impl Machine {
    /// Create a host with zeroed IWRAM and the game clock at `start_time`
    /// frames.
    pub fn new(start_time: u64) -> Self {
        Self {
            iwram: Ram::new(IWRAM_ORG, IWRAM_SIZE as usize),
            clock: Clock::starting_at(start_time),
            gold: 0,
            gifts: Vec::new(),
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn gold(&self) -> SlotValue {
        self.gold
    }

    pub fn gifts(&self) -> &[ItemGift] {
        &self.gifts
    }

    /// Snapshot of the slot table
    pub fn slots(&self) -> Result<[SlotValue; SLOT_COUNT], BusError> {
        let mut table = [0; SLOT_COUNT];
        self.iwram.read_words(EVENT_SLOT_ORG, &mut table)?;
        Ok(table)
    }

    pub fn slot(&self, slot: Slot) -> Result<SlotValue, BusError> {
        let val = self
            .iwram
            .read(AccessSize::Word, EVENT_SLOT_ORG + slot.offset())?;
        Ok(val as SlotValue)
    }

    pub fn set_slot(&mut self, slot: Slot, val: SlotValue) -> Result<(), BusError> {
        self.iwram
            .write(AccessSize::Word, EVENT_SLOT_ORG + slot.offset(), val as u32)
    }

    /// Hand control to a native routine. The routine sees the slot table
    /// through an `EventSlots` view and runs to completion before the table
    /// is written back.
    pub fn call(&mut self, routine: Routine) -> Result<(), BusError> {
        let mut table = self.slots()?;
        routine.call(&mut EventSlots::new(&mut table), &self.clock.timer());
        self.iwram.write_words(EVENT_SLOT_ORG, &table)
    }

    /// Execute a single event instruction
    pub fn execute(&mut self, instr: Instruction) -> Result<(), BusError> {
        match instr {
            Instruction::SetValue { slot, value } => self.set_slot(slot, value)?,
            Instruction::Add { dst, lhs, rhs } => {
                let sum = self.slot(lhs)?.wrapping_add(self.slot(rhs)?);
                self.set_slot(dst, sum)?;
            }
            Instruction::Asmc(routine) => {
                self.call(routine)?;
                info!("ASMC {routine}: sC = {}", self.slot(Slot::RESULT)?);
            }
            Instruction::Stall { frames } => {
                self.clock.increment(frames);
            }
            Instruction::GiveItemToMain { character } => {
                let item = self.slot(Slot::S3)?;
                if character == 0 {
                    self.gold = self.gold.saturating_add(item).clamp(0, GOLD_MAX);
                    info!("gold is now {}", self.gold);
                } else {
                    self.gifts.push(ItemGift { character, item });
                    info!("gave item {item:#x} to character {character:#x}");
                }
            }
        }
        Ok(())
    }

    /// Execute a script from start to end
    pub fn run(&mut self, script: &[Statement]) -> Result<(), ScriptError> {
        for statement in script {
            debug!(
                "line {} @ frame {}: {:?}",
                statement.line,
                self.clock.now(),
                statement.instr
            );
            self.execute(statement.instr)
                .map_err(|err| ScriptError::Bus {
                    line: statement.line,
                    err,
                })?;
        }
        Ok(())
    }
}
