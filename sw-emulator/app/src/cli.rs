// Licensed under the Apache-2.0 license

use clap::Parser;
use gbafe_types::{Slot, SlotValue};
use std::path::PathBuf;

use crate::script;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Args {
    /// Event script path
    pub script: PathBuf,

    /// Game time, in frames, when the script starts
    #[arg(long, default_value_t = 0)]
    pub start_time: u64,

    /// Preset an event slot before the script runs, as INDEX=VALUE
    #[arg(long = "slot", value_name = "INDEX=VALUE", value_parser = parse_slot_preset)]
    pub slots: Vec<(Slot, SlotValue)>,

    /// Log every executed instruction
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_slot_preset(arg: &str) -> Result<(Slot, SlotValue), String> {
    let (index, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=VALUE, got {arg:?}"))?;
    let index = script::parse_number(index.trim())
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| format!("invalid slot index {index:?}"))?;
    let slot = Slot::try_from(index).map_err(|err| err.to_string())?;
    let value = script::parse_value(value.trim()).ok_or_else(|| format!("invalid value {value:?}"))?;
    Ok((slot, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "gbafe-emu",
            "sum.event",
            "--start-time",
            "60",
            "--slot",
            "1=5",
            "--slot",
            "0xC=-1",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.script, PathBuf::from("sum.event"));
        assert_eq!(args.start_time, 60);
        assert_eq!(args.slots, vec![(Slot::S1, 5), (Slot::SC, -1)]);
        assert!(args.verbose);
    }

    #[test]
    fn test_slot_preset_errors() {
        assert!(parse_slot_preset("1").is_err());
        assert!(parse_slot_preset("x=1").is_err());
        assert!(parse_slot_preset("14=1").is_err());
        assert!(parse_slot_preset("1=abc").is_err());
    }
}
