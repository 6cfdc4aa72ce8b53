//! Cricket: a headless Chip-8 runner
//!
//! Loads a ROM, steps the machine a fixed number of cycles (or until it
//! faults), then prints the screen and a register dump. Real-time pacing,
//! windowing and input are out of scope here; the keypad snapshot is always
//! "nothing pressed".

use cricket::prelude::*;
use gumdrop::*;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Options, Hash)]
struct Arguments {
    #[options(help = "Print this help message.")]
    help: bool,
    #[options(help = "Load a ROM to run on Cricket.", required, free)]
    pub file: PathBuf,
    #[options(help = "Number of instructions to run.", default = "4860")]
    pub cycles: usize,
    #[options(help = "Print a live disassembly while running.")]
    pub debug: bool,
    #[options(help = "Truncate an oversized ROM instead of rejecting it.")]
    pub truncate: bool,
    #[options(help = "Seed the random source, for reproducible runs.")]
    pub seed: Option<u64>,
    #[options(
        help = "Instructions per 60 Hz timer tick (default 9).",
        default = "9"
    )]
    pub tickrate: u32,
}

fn main() -> Result<()> {
    let options = Arguments::parse_args_default_or_exit();
    let mut cpu = Cpu::new(Flags {
        debug: options.debug,
        truncate: options.truncate,
        seed: options.seed,
        cycles_per_tick: options.tickrate,
    });
    cpu.load_rom(&options.file)?;

    let keys = [false; 16];
    for _ in 0..options.cycles {
        if let Err(fault) = cpu.step(&keys) {
            eprintln!("{}", fault.bold().red());
            break;
        }
    }

    print!("{}", cpu.screen());
    cpu.dump();
    Ok(())
}
