//! Caller-configurable behavior that isn't part of the Chip-8 itself

/// Knobs that control the interpreter without being machine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Flags {
    /// Set to print a live disassembly of each executed instruction
    pub debug: bool,
    /// Set to silently truncate an oversized program image instead of
    /// rejecting it at load time
    pub truncate: bool,
    /// Instructions executed per 60 Hz timer tick. 9 gives the canonical
    /// 540 Hz instruction clock.
    pub cycles_per_tick: u32,
    /// Seed for the `Cxbb` random source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Flags {
    /// Toggles debug (live disassembly) mode
    ///
    /// # Examples
    /// ```rust
    /// # use cricket::*;
    /// let mut cpu = Cpu::default();
    /// assert_eq!(false, cpu.flags.debug);
    /// cpu.flags.debug();
    /// assert_eq!(true, cpu.flags.debug);
    /// ```
    pub fn debug(&mut self) {
        self.debug = !self.debug
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            debug: false,
            truncate: false,
            cycles_per_tick: 9,
            seed: None,
        }
    }
}
