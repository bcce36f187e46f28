/*++

Licensed under the Apache-2.0 license.

File Name:

    script.rs

Abstract:

    File contains the parser for the subset of FE8 event scripts used to
    drive ASMC routines.

--*/

use crate::routines::Routine;
use gbafe_emu_bus::BusError;
use gbafe_types::{InvalidSlot, Slot, SlotValue};
use std::fmt;

/// Event instruction
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Instruction {
    /// `SVAL slot value`
    SetValue { slot: Slot, value: SlotValue },

    /// `SADD 0xRLD` or `SADD dst lhs rhs`: `dst = lhs + rhs`
    Add { dst: Slot, lhs: Slot, rhs: Slot },

    /// `ASMC routine`
    Asmc(Routine),

    /// `STAL frames`
    Stall { frames: u64 },

    /// `GIVEITEMTOMAIN character`: give the item (or, for character 0, the
    /// gold amount) held in s3.
    GiveItemToMain { character: u16 },
}

/// An instruction and the script line it came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Statement {
    pub line: usize,
    pub instr: Instruction,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ScriptError {
    UnknownOpcode { line: usize, opcode: String },
    OperandCount { line: usize, opcode: &'static str },
    BadNumber { line: usize, text: String },
    BadSlot { line: usize, slot: InvalidSlot },
    UnknownRoutine { line: usize, name: String },
    Bus { line: usize, err: BusError },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownOpcode { line, opcode } => {
                write!(f, "line {line}: unknown opcode {opcode}")
            }
            ScriptError::OperandCount { line, opcode } => {
                write!(f, "line {line}: wrong number of operands for {opcode}")
            }
            ScriptError::BadNumber { line, text } => {
                write!(f, "line {line}: invalid number {text:?}")
            }
            ScriptError::BadSlot { line, slot } => write!(f, "line {line}: {slot}"),
            ScriptError::UnknownRoutine { line, name } => {
                write!(f, "line {line}: no ASMC routine named {name}")
            }
            ScriptError::Bus { line, err } => write!(f, "line {line}: {err}"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Parses a decimal, `0x` hex or `$` hex number, with an optional leading
/// minus sign.
pub fn parse_number(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .or_else(|| digits.strip_prefix('$'))
    {
        parse_magnitude(hex, 16)?
    } else {
        parse_magnitude(digits, 10)?
    };
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}

/// Unsigned digits only; the sign has already been consumed by the caller.
fn parse_magnitude(digits: &str, radix: u32) -> Option<i64> {
    if digits.starts_with(['+', '-']) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

/// Parses a 32-bit slot value. Hex literals above `i32::MAX` are taken as
/// their two's-complement bit pattern.
pub fn parse_value(text: &str) -> Option<SlotValue> {
    let val = parse_number(text)?;
    if (i32::MIN as i64..=u32::MAX as i64).contains(&val) {
        Some(val as u32 as SlotValue)
    } else {
        None
    }
}

struct Operands<'a> {
    line: usize,
    opcode: &'static str,
    words: Vec<&'a str>,
}

impl<'a> Operands<'a> {
    fn exact<const N: usize>(&self) -> Result<[&'a str; N], ScriptError> {
        <[&'a str; N]>::try_from(self.words.as_slice()).map_err(|_| ScriptError::OperandCount {
            line: self.line,
            opcode: self.opcode,
        })
    }

    fn number(&self, text: &str) -> Result<i64, ScriptError> {
        parse_number(text).ok_or_else(|| self.bad_number(text))
    }

    fn bad_number(&self, text: &str) -> ScriptError {
        ScriptError::BadNumber {
            line: self.line,
            text: text.to_string(),
        }
    }

    fn slot(&self, text: &str) -> Result<Slot, ScriptError> {
        let index = usize::try_from(self.number(text)?).map_err(|_| self.bad_number(text))?;
        self.slot_index(index)
    }

    fn slot_index(&self, index: usize) -> Result<Slot, ScriptError> {
        Slot::try_from(index).map_err(|slot| ScriptError::BadSlot {
            line: self.line,
            slot,
        })
    }
}

fn parse_line(line: usize, text: &str) -> Result<Option<Instruction>, ScriptError> {
    let code = match text.find("//") {
        Some(pos) => &text[..pos],
        None => text,
    };
    let mut words = code.split_whitespace();
    let Some(opcode) = words.next() else {
        return Ok(None);
    };
    let opcode: &'static str = match opcode {
        "SVAL" => "SVAL",
        "SADD" => "SADD",
        "ASMC" => "ASMC",
        "STAL" => "STAL",
        "GIVEITEMTOMAIN" => "GIVEITEMTOMAIN",
        other => {
            return Err(ScriptError::UnknownOpcode {
                line,
                opcode: other.to_string(),
            })
        }
    };
    let ops = Operands {
        line,
        opcode,
        words: words.collect(),
    };

    let instr = match opcode {
        "SVAL" => {
            let [slot, value] = ops.exact::<2>()?;
            Instruction::SetValue {
                slot: ops.slot(slot)?,
                value: parse_value(value).ok_or_else(|| ops.bad_number(value))?,
            }
        }
        "SADD" => match ops.words.len() {
            1 => {
                let packed = ops.number(ops.words[0])?;
                if !(0..=0xFFF).contains(&packed) {
                    return Err(ops.bad_number(ops.words[0]));
                }
                let nibble = |shift: u32| ops.slot_index(((packed >> shift) & 0xF) as usize);
                Instruction::Add {
                    dst: nibble(0)?,
                    lhs: nibble(4)?,
                    rhs: nibble(8)?,
                }
            }
            _ => {
                let [dst, lhs, rhs] = ops.exact::<3>()?;
                Instruction::Add {
                    dst: ops.slot(dst)?,
                    lhs: ops.slot(lhs)?,
                    rhs: ops.slot(rhs)?,
                }
            }
        },
        "ASMC" => {
            let [name] = ops.exact::<1>()?;
            let routine = Routine::lookup(name).ok_or_else(|| ScriptError::UnknownRoutine {
                line,
                name: name.to_string(),
            })?;
            Instruction::Asmc(routine)
        }
        "STAL" => {
            let [frames] = ops.exact::<1>()?;
            let frames = u64::try_from(ops.number(frames)?).map_err(|_| ops.bad_number(frames))?;
            Instruction::Stall { frames }
        }
        _ => {
            let [character] = ops.exact::<1>()?;
            let character =
                u16::try_from(ops.number(character)?).map_err(|_| ops.bad_number(character))?;
            Instruction::GiveItemToMain { character }
        }
    };
    Ok(Some(instr))
}

/// Parses an event script. Line numbers start at 1.
pub fn parse(source: &str) -> Result<Vec<Statement>, ScriptError> {
    let mut statements = Vec::new();
    for (i, text) in source.lines().enumerate() {
        let line = i + 1;
        if let Some(instr) = parse_line(line, text)? {
            statements.push(Statement { line, instr });
        }
    }
    Ok(statements)
}
