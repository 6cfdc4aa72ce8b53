//! Error types for cricket

use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@Error]>
pub type Result<T> = std::result::Result<T, Error>;

/// A program image that could not be loaded.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The image does not fit between 0x200 and the end of memory
    #[error("program is {size} bytes, but only {max} fit in memory")]
    TooLarge {
        /// Size of the offending image
        size: usize,
        /// Bytes available above the program offset
        max: usize,
    },
}

/// A fault that ends execution. Every variant is fatal: the machine latches
/// into a halted state and refuses further steps.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    /// The word at `addr` matches no known opcode pattern
    #[error("opcode {word:04x} at {addr:03x} not recognized")]
    UnknownOpcode {
        /// The offending word
        word: u16,
        /// Address it was fetched from
        addr: u16,
    },
    /// A call was made with all 16 stack slots in use
    #[error("call at {addr:03x} overflowed the 16-slot stack")]
    StackOverflow {
        /// Address of the offending call
        addr: u16,
    },
    /// A return was executed with nothing on the stack
    #[error("return executed with an empty stack")]
    StackUnderflow,
    /// `Fx29` asked for a glyph outside 0x0..=0xF
    #[error("no font glyph for value {value:02x}")]
    InvalidFontIndex {
        /// The offending register value
        value: u8,
    },
    /// `Ex9E`/`ExA1` tested a key outside 0x0..=0xF
    #[error("tried to test key {key:X} which does not exist")]
    InvalidKey {
        /// The offending key
        key: u8,
    },
    /// A memory access resolved outside the 4096-byte address space
    #[error("address {addr:04x} is outside memory")]
    OutOfBounds {
        /// The offending address
        addr: u16,
    },
    /// The machine already faulted; it will not run again until reloaded
    #[error("machine is halted")]
    Halted,
}

/// Umbrella error for cricket.
#[derive(Debug, Error)]
pub enum Error {
    /// A program image failed to load
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Execution faulted
    #[error(transparent)]
    Exec(#[from] ExecError),
    /// Error originated in [std::io]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
