//! Decodes and runs instructions


pub mod behavior;
pub mod flags;
pub mod font;
pub mod instruction;
pub mod screen;

use self::{
    flags::Flags,
    instruction::{
        disassembler::{Dis, Disassembler},
        Insn,
    },
    screen::Screen,
};
use crate::error::{ExecError, LoadError, Result};
use imperative_rs::InstructionSet;
use owo_colors::OwoColorize;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::Debug;

type Reg = usize;
type Adr = u16;
type Nib = u8;

/// Size of the address space, in bytes.
pub const MEM_SIZE: usize = 4096;
/// Address programs are loaded (and started) at.
pub const PROGRAM_OFFSET: usize = 0x200;
/// Number of return addresses the stack can hold.
pub const STACK_DEPTH: usize = 16;
/// Number of keys on the keypad.
pub const NUM_KEYS: usize = 16;

/// The caller's snapshot of which keypad keys are down. The interpreter only
/// ever reads it.
pub type Keypad = [bool; NUM_KEYS];

/// The whole machine: memory, registers, stack, timers and screen, driven
/// one instruction at a time by [Cpu::step].
#[derive(Clone)]
pub struct Cpu {
    /// Flags that control how the interpreter behaves, but which aren't
    /// inherent to the chip-8. See [Flags].
    pub flags: Flags,
    // memory
    mem: [u8; MEM_SIZE],
    stack: Vec<Adr>,
    // registers
    pc: Adr,
    i: Adr,
    v: [u8; 16],
    delay: u8,
    sound: u8,
    // display
    screen: Screen,
    // Execution data
    cycle: usize,
    divider: u32,
    halted: bool,
    rng: StdRng,
    disassembler: Dis,
}

// public interface
impl Cpu {
    /// Constructs a new machine with the given [Flags]: font installed,
    /// everything else zeroed, pc at 0x200.
    ///
    /// # Examples
    /// ```rust
    /// # use cricket::*;
    /// let cpu = Cpu::new(Flags {
    ///     seed: Some(0xcafe),
    ///     ..Default::default()
    /// });
    /// assert_eq!(0x200, cpu.pc());
    /// ```
    pub fn new(flags: Flags) -> Self {
        let mut mem = [0; MEM_SIZE];
        mem[font::FONT_OFFSET..font::FONT_OFFSET + font::FONT.len()].copy_from_slice(&font::FONT);
        Cpu {
            flags,
            mem,
            stack: vec![],
            pc: PROGRAM_OFFSET as Adr,
            i: 0,
            v: [0; 16],
            delay: 0,
            sound: 0,
            screen: Screen::default(),
            cycle: 0,
            divider: flags.cycles_per_tick,
            halted: false,
            rng: match flags.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
            disassembler: Dis::default(),
        }
    }

    /// Loads a program image into memory at 0x200 and resets the machine.
    ///
    /// An image larger than `4096 - 0x200` bytes is rejected with
    /// [LoadError::TooLarge], unless [Flags::truncate] is set, in which case
    /// the excess is dropped.
    ///
    /// # Examples
    /// ```rust
    /// # use cricket::*;
    /// let mut cpu = Cpu::default();
    /// cpu.load(&[0x00, 0xe0]).unwrap();
    /// assert_eq!(0x200, cpu.pc());
    /// ```
    pub fn load(&mut self, rom: &[u8]) -> std::result::Result<(), LoadError> {
        let max = MEM_SIZE - PROGRAM_OFFSET;
        let len = if rom.len() > max {
            if !self.flags.truncate {
                return Err(LoadError::TooLarge {
                    size: rom.len(),
                    max,
                });
            }
            max
        } else {
            rom.len()
        };
        self.reset();
        self.mem[font::FONT.len()..].fill(0);
        self.mem[PROGRAM_OFFSET..PROGRAM_OFFSET + len].copy_from_slice(&rom[..len]);
        Ok(())
    }

    /// Loads a program image from a file. See [Cpu::load].
    pub fn load_rom(&mut self, rom: impl AsRef<std::path::Path>) -> Result<&mut Self> {
        self.load(&std::fs::read(rom)?)?;
        Ok(self)
    }

    /// Runs exactly one fetch-decode-execute cycle, then advances the timer
    /// divider. `keys` is the caller's keypad snapshot for this step.
    ///
    /// A failed step mutates nothing and latches the machine halted; every
    /// step after that returns [ExecError::Halted] until the next load.
    ///
    /// # Examples
    /// ```rust
    /// # use cricket::*;
    /// let mut cpu = Cpu::default();
    /// cpu.load(&[0x60, 0x40]).unwrap(); // mov #40, v0
    /// cpu.step(&[false; 16]).unwrap();
    /// assert_eq!(0x202, cpu.pc());
    /// assert_eq!(0x40, cpu.v()[0]);
    /// ```
    pub fn step(&mut self, keys: &Keypad) -> std::result::Result<(), ExecError> {
        if self.halted {
            return Err(ExecError::Halted);
        }
        if let Err(fault) = self.tick(keys) {
            self.halted = true;
            return Err(fault);
        }
        // The sole crossing between the instruction clock and the 60 Hz
        // timer clock
        self.cycle += 1;
        self.divider = self.divider.saturating_sub(1);
        if self.divider == 0 {
            self.divider = self.flags.cycles_per_tick;
            self.delay = self.delay.saturating_sub(1);
            self.sound = self.sound.saturating_sub(1);
        }
        Ok(())
    }

    /// Gets a read-only view of the screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Gets the value in the Sound Timer register
    ///
    /// # Examples
    /// ```rust
    /// # use cricket::*;
    /// let cpu = Cpu::default();
    /// assert_eq!(0, cpu.sound());
    /// ```
    pub fn sound(&self) -> u8 {
        self.sound
    }

    /// Gets the value in the Delay Timer register
    pub fn delay(&self) -> u8 {
        self.delay
    }

    /// Gets the program counter
    ///
    /// # Examples
    /// ```rust
    /// # use cricket::*;
    /// let cpu = Cpu::default();
    /// assert_eq!(0x200, cpu.pc());
    /// ```
    pub fn pc(&self) -> Adr {
        self.pc
    }

    /// Gets the I register
    pub fn i(&self) -> Adr {
        self.i
    }

    /// Gets a slice of the entire general purpose registers
    pub fn v(&self) -> &[u8] {
        self.v.as_slice()
    }

    /// Gets a slice of the call stack, bottom first
    pub fn stack(&self) -> &[Adr] {
        self.stack.as_slice()
    }

    /// Gets the number of instructions executed since the last load
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Reports whether the machine has latched halted after a fault
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns the machine to its post-[Cpu::new] register state. Memory is
    /// left as-is; [Cpu::load] is the only way to replace it.
    pub fn reset(&mut self) {
        self.stack.truncate(0);
        self.pc = PROGRAM_OFFSET as Adr;
        self.i = 0;
        self.v = [0; 16];
        self.delay = 0;
        self.sound = 0;
        self.screen.clear();
        self.cycle = 0;
        self.divider = self.flags.cycles_per_tick;
        self.halted = false;
    }

    /// Dumps the current state of all registers, and the cycle count
    pub fn dump(&self) {
        std::println!(
            "PC: {:04x}, SP: {:04x}, I: {:04x}\n{}DLY: {}, SND: {}, CYC: {:6}",
            self.pc,
            self.stack.len(),
            self.i,
            self.v
                .into_iter()
                .enumerate()
                .map(|(i, gpr)| {
                    format!(
                        "v{i:X}: {gpr:02x} {}",
                        match i % 4 {
                            3 => "\n",
                            _ => "",
                        }
                    )
                })
                .collect::<String>(),
            self.delay,
            self.sound,
            self.cycle,
        );
    }
}

// fetch/decode/execute internals
impl Cpu {
    /// Fetches, decodes and executes the instruction at pc.
    fn tick(&mut self, keys: &Keypad) -> std::result::Result<(), ExecError> {
        let addr = self.pc;
        let word = u16::from_be_bytes([self.read_byte(addr)?, self.read_byte(addr.wrapping_add(1))?]);

        // Print opcode disassembly:
        if self.flags.debug {
            std::println!(
                "{:3} {:03x}: {:<36}",
                self.cycle.bright_black(),
                addr,
                self.disassembler.once(word)
            );
        }

        let Ok((_, insn)) = Insn::decode(&word.to_be_bytes()) else {
            return Err(ExecError::UnknownOpcode { word, addr });
        };
        self.pc = self.pc.wrapping_add(2);
        if let Err(fault) = self.execute(insn, keys) {
            // a failed instruction leaves no trace, not even the pc advance
            self.pc = addr;
            return Err(fault);
        }
        Ok(())
    }

    /// Reads one byte of memory, or faults.
    fn read_byte(&self, addr: Adr) -> std::result::Result<u8, ExecError> {
        self.mem
            .get(addr as usize)
            .copied()
            .ok_or(ExecError::OutOfBounds { addr })
    }

    /// Borrows `len` bytes of memory starting at `addr`, or faults.
    fn read_slice(&self, addr: Adr, len: usize) -> std::result::Result<&[u8], ExecError> {
        self.mem
            .get(addr as usize..addr as usize + len)
            .ok_or(ExecError::OutOfBounds {
                addr: addr.wrapping_add(len as Adr),
            })
    }

    /// Mutably borrows `len` bytes of memory starting at `addr`, or faults.
    fn write_slice(&mut self, addr: Adr, len: usize) -> std::result::Result<&mut [u8], ExecError> {
        self.mem
            .get_mut(addr as usize..addr as usize + len)
            .ok_or(ExecError::OutOfBounds {
                addr: addr.wrapping_add(len as Adr),
            })
    }
}

impl Debug for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("flags", &self.flags)
            .field("stack", &self.stack)
            .field("pc", &self.pc)
            .field("i", &self.i)
            .field("v", &self.v)
            .field("delay", &self.delay)
            .field("sound", &self.sound)
            .field("cycle", &self.cycle)
            .field("divider", &self.divider)
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}

impl Default for Cpu {
    /// Constructs a new machine with default [Flags]
    fn default() -> Self {
        Self::new(Flags::default())
    }
}
