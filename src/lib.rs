//! A CHIP-8 virtual machine core.
//!
//! The whole machine lives in one [`Cpu`](cpu::Cpu): 4K of memory, sixteen
//! 8-bit registers, a 16-deep call stack, two 60 Hz countdown timers and a
//! 64x32 monochrome framebuffer. The host feeds it a program image and a
//! keypad snapshot, calls [`step`](cpu::Cpu::step) at whatever pace it likes,
//! and reads back the [`Screen`](cpu::screen::Screen) and sound timer.
//! Windowing, audio and input devices are the host's problem, not ours.

pub mod cpu;
pub mod error;

pub use cpu::{flags::Flags, instruction::Insn, screen::Screen, Cpu, Keypad};
pub use error::{Error, ExecError, LoadError, Result};

/// Common imports for cricket
pub mod prelude {
    pub use crate::cpu::{
        flags::Flags,
        instruction::disassembler::{Dis, Disassembler},
        screen::Screen,
        Cpu, Keypad,
    };
    pub use crate::error::{Error, ExecError, LoadError, Result};
}
