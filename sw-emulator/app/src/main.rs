/*++

Licensed under the Apache-2.0 license.

File Name:

    main.rs

Abstract:

    File contains main entrypoint for the FE8 ASMC host emulator. It runs an
    event script against an emulated slot table and game clock, then prints
    the final slot table.

--*/

use anyhow::Context;
use clap::Parser;
use gbafe_types::Slot;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::process::exit;

mod cli;
mod machine;
mod routines;
mod script;

use crate::cli::Args;
use crate::machine::Machine;

fn run(args: &Args) -> anyhow::Result<Machine> {
    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Cannot read script {}", args.script.display()))?;
    let statements = script::parse(&source)
        .with_context(|| format!("Cannot parse script {}", args.script.display()))?;

    let mut machine = Machine::new(args.start_time);
    for (slot, value) in &args.slots {
        machine.set_slot(*slot, *value)?;
    }
    machine.run(&statements)?;
    Ok(machine)
}

fn print_report(machine: &Machine) -> anyhow::Result<()> {
    let slots = machine.slots()?;
    for slot in Slot::ALL {
        let val = slots[slot.index()];
        println!("{:>3} = 0x{:08x} ({val})", slot.to_string(), val as u32);
    }
    println!("time = {}", machine.clock().now());
    println!("gold = {}", machine.gold());
    for gift in machine.gifts() {
        println!("item 0x{:x} -> character 0x{:x}", gift.item, gift.character);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = SimpleLogger::new().with_level(level).init();

    let result = run(&args).and_then(|machine| print_report(&machine));
    result.unwrap_or_else(|e| {
        log::error!("Error: {:#}", e);
        exit(1);
    });
}
