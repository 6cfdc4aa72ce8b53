//! Static disassembler for Chip-8 ROM files

use cricket::prelude::*;
use gumdrop::*;
use owo_colors::OwoColorize;
use std::{fs::read, path::PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Options, Hash)]
struct Arguments {
    #[options(help = "Print this help message.")]
    help: bool,
    #[options(help = "Disassemble a ROM file.", required, free)]
    pub file: PathBuf,
    #[options(help = "Start disassembling at offset...")]
    pub offset: usize,
}

fn main() -> Result<()> {
    let options = Arguments::parse_args_default_or_exit();
    let contents = &read(&options.file)?;
    let disassembler = Dis::default();
    for (addr, insn) in contents[options.offset..].chunks_exact(2).enumerate() {
        let insn = u16::from_be_bytes(
            insn.try_into()
                .expect("Iterated over 2-byte chunks, got <2 bytes"),
        );
        println!(
            "{}",
            format_args!(
                "{:03x}: {} {:04x}",
                2 * addr + 0x200 + options.offset,
                disassembler.once(insn),
                insn.bright_black(),
            )
        );
    }
    Ok(())
}
