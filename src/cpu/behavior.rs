//! Contains implementations for each Chip-8 [Insn]

use super::*;
use crate::error::ExecError;
use rand::Rng;

type ExecResult = std::result::Result<(), ExecError>;

impl Cpu {
    /// Executes a single [Insn]
    #[rustfmt::skip]
    #[inline(always)]
    pub(super) fn execute(&mut self, instruction: Insn, keys: &Keypad) -> ExecResult {
        match instruction {
            Insn::cls               => Ok(self.clear_screen()),
            Insn::ret               => self.ret(),
            Insn::jmp   {       A } => Ok(self.jump(A)),
            Insn::call  {       A } => self.call(A),
            Insn::seb   {    x, B } => Ok(self.skip_equals_immediate(x, B)),
            Insn::sneb  {    x, B } => Ok(self.skip_not_equals_immediate(x, B)),
            Insn::se    { y, x    } => Ok(self.skip_equals(x, y)),
            Insn::movb  {    x, B } => Ok(self.load_immediate(x, B)),
            Insn::addb  {    x, B } => Ok(self.add_immediate(x, B)),
            Insn::mov   { y, x    } => Ok(self.load_register(x, y)),
            Insn::or    { y, x    } => Ok(self.or(x, y)),
            Insn::and   { y, x    } => Ok(self.and(x, y)),
            Insn::xor   { y, x    } => Ok(self.xor(x, y)),
            Insn::add   { y, x    } => Ok(self.add(x, y)),
            Insn::sub   { y, x    } => Ok(self.sub(x, y)),
            Insn::shr   { y, x    } => Ok(self.shift_right(x, y)),
            Insn::bsub  { y, x    } => Ok(self.backwards_sub(x, y)),
            Insn::shl   { y, x    } => Ok(self.shift_left(x, y)),
            Insn::sne   { y, x    } => Ok(self.skip_not_equals(x, y)),
            Insn::movI  {       A } => Ok(self.load_i_immediate(A)),
            Insn::rand  {    x, B } => Ok(self.rand(x, B)),
            Insn::draw  { y, x, n } => self.draw(x, y, n),
            Insn::sek   {    x    } => self.skip_key_equals(x, keys),
            Insn::snek  {    x    } => self.skip_key_not_equals(x, keys),
            Insn::getdt {    x    } => Ok(self.load_delay_timer(x)),
            Insn::waitk {    x    } => Ok(self.wait_for_key(x, keys)),
            Insn::setdt {    x    } => Ok(self.store_delay_timer(x)),
            Insn::movst {    x    } => Ok(self.store_sound_timer(x)),
            Insn::addI  {    x    } => Ok(self.add_i(x)),
            Insn::font  {    x    } => self.load_sprite(x),
            Insn::bcd   {    x    } => self.bcd_convert(x),
            Insn::dmao  {    x    } => self.store_dma(x),
            Insn::dmai  {    x    } => self.load_dma(x),
        }
    }
}

/// |`00bb`| System routines
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`00e0`| Clear screen memory to all 0       |
/// |`00ee`| Return from subroutine             |
impl Cpu {
    /// |`00e0`| Clears the screen memory to 0
    #[inline(always)]
    pub(super) fn clear_screen(&mut self) {
        self.screen.clear();
    }
    /// |`00ee`| Returns from subroutine. Faults if the stack is empty.
    #[inline(always)]
    pub(super) fn ret(&mut self) -> ExecResult {
        self.pc = self.stack.pop().ok_or(ExecError::StackUnderflow)?;
        Ok(())
    }
}

/// |`1aaa`| Sets pc to an absolute address
impl Cpu {
    /// |`1aaa`| Sets the program counter to an absolute address
    #[inline(always)]
    pub(super) fn jump(&mut self, a: Adr) {
        self.pc = a;
    }
}

/// |`2aaa`| Pushes the return address onto the stack, then jumps to a
impl Cpu {
    /// |`2aaa`| Pushes the return address onto the stack, then jumps to a.
    /// Faults if all 16 stack slots are in use.
    #[inline(always)]
    pub(super) fn call(&mut self, a: Adr) -> ExecResult {
        if self.stack.len() >= STACK_DEPTH {
            return Err(ExecError::StackOverflow {
                addr: self.pc.wrapping_sub(2),
            });
        }
        self.stack.push(self.pc);
        self.pc = a;
        Ok(())
    }
}

/// |`3xbb`| Skips next instruction if register X == b
impl Cpu {
    /// |`3xbb`| Skips the next instruction if register X == b
    #[inline(always)]
    pub(super) fn skip_equals_immediate(&mut self, x: Reg, b: u8) {
        if self.v[x] == b {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`4xbb`| Skips next instruction if register X != b
impl Cpu {
    /// |`4xbb`| Skips the next instruction if register X != b
    #[inline(always)]
    pub(super) fn skip_not_equals_immediate(&mut self, x: Reg, b: u8) {
        if self.v[x] != b {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`5xy0`| Performs a register-register comparison
impl Cpu {
    /// |`5xy0`| Skips the next instruction if register X == register Y
    #[inline(always)]
    pub(super) fn skip_equals(&mut self, x: Reg, y: Reg) {
        if self.v[x] == self.v[y] {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`6xbb`| Loads immediate byte b into register vX
impl Cpu {
    /// |`6xbb`| Loads immediate byte b into register vX
    #[inline(always)]
    pub(super) fn load_immediate(&mut self, x: Reg, b: u8) {
        self.v[x] = b;
    }
}

/// |`7xbb`| Adds immediate byte b to register vX
impl Cpu {
    /// |`7xbb`| Adds immediate byte b to register vX. vF is untouched.
    #[inline(always)]
    pub(super) fn add_immediate(&mut self, x: Reg, b: u8) {
        self.v[x] = self.v[x].wrapping_add(b);
    }
}

/// |`8xyn`| Performs ALU operation
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`8xy0`| X = Y                              |
/// |`8xy1`| X = X | Y                          |
/// |`8xy2`| X = X & Y                          |
/// |`8xy3`| X = X ^ Y                          |
/// |`8xy4`| X = X + Y; set vF on carry         |
/// |`8xy5`| X = X - Y; vF = X > Y              |
/// |`8xy6`| X = X >> 1; vF = shifted-out bit   |
/// |`8xy7`| X = Y - X; vF = Y > X              |
/// |`8xyE`| X = X << 1; vF = shifted-out bit   |
impl Cpu {
    /// |`8xy0`| Loads the value of y into x
    #[inline(always)]
    pub(super) fn load_register(&mut self, x: Reg, y: Reg) {
        self.v[x] = self.v[y];
    }
    /// |`8xy1`| Performs bitwise or of vX and vY, and stores the result in vX
    #[inline(always)]
    pub(super) fn or(&mut self, x: Reg, y: Reg) {
        self.v[x] |= self.v[y];
    }
    /// |`8xy2`| Performs bitwise and of vX and vY, and stores the result in vX
    #[inline(always)]
    pub(super) fn and(&mut self, x: Reg, y: Reg) {
        self.v[x] &= self.v[y];
    }
    /// |`8xy3`| Performs bitwise xor of vX and vY, and stores the result in vX
    #[inline(always)]
    pub(super) fn xor(&mut self, x: Reg, y: Reg) {
        self.v[x] ^= self.v[y];
    }
    /// |`8xy4`| Performs addition of vX and vY, and stores the result in vX.
    /// vF becomes 1 on carry and keeps its value otherwise.
    #[inline(always)]
    pub(super) fn add(&mut self, x: Reg, y: Reg) {
        let carry;
        (self.v[x], carry) = self.v[x].overflowing_add(self.v[y]);
        if carry {
            self.v[0xf] = 1;
        }
    }
    /// |`8xy5`| Performs subtraction of vX and vY, and stores the result in vX.
    /// vF = 1 if vX was strictly greater than vY.
    #[inline(always)]
    pub(super) fn sub(&mut self, x: Reg, y: Reg) {
        let flag = (self.v[x] > self.v[y]).into();
        self.v[x] = self.v[x].wrapping_sub(self.v[y]);
        self.v[0xf] = flag;
    }
    /// |`8xy6`| Performs bitwise right shift of vX; vF = the low bit shifted out
    #[inline(always)]
    pub(super) fn shift_right(&mut self, x: Reg, _y: Reg) {
        let shift_out = self.v[x] & 1;
        self.v[x] >>= 1;
        self.v[0xf] = shift_out;
    }
    /// |`8xy7`| Performs subtraction of vY and vX, and stores the result in vX.
    /// vF = 1 if vY was strictly greater than vX.
    #[inline(always)]
    pub(super) fn backwards_sub(&mut self, x: Reg, y: Reg) {
        let flag = (self.v[y] > self.v[x]).into();
        self.v[x] = self.v[y].wrapping_sub(self.v[x]);
        self.v[0xf] = flag;
    }
    /// |`8xyE`| Performs bitwise left shift of vX; vF = the high bit shifted
    /// out, normalized to 0/1
    #[inline(always)]
    pub(super) fn shift_left(&mut self, x: Reg, _y: Reg) {
        let shift_out = self.v[x] >> 7;
        self.v[x] <<= 1;
        self.v[0xf] = shift_out;
    }
}

/// |`9xy0`| Performs a register-register comparison
impl Cpu {
    /// |`9xy0`| Skip next instruction if vX != vY
    #[inline(always)]
    pub(super) fn skip_not_equals(&mut self, x: Reg, y: Reg) {
        if self.v[x] != self.v[y] {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`Aaaa`| Load address #a into register I
impl Cpu {
    /// |`Aadr`| Load address #adr into register I
    #[inline(always)]
    pub(super) fn load_i_immediate(&mut self, a: Adr) {
        self.i = a;
    }
}

/// |`Cxbb`| Stores a random number & the provided byte into vX
impl Cpu {
    /// |`Cxbb`| Stores a random number & the provided byte into vX.
    /// Deterministic when [Flags::seed](super::flags::Flags::seed) is set.
    #[inline(always)]
    pub(super) fn rand(&mut self, x: Reg, b: u8) {
        self.v[x] = self.rng.gen::<u8>() & b;
    }
}

/// |`Dxyn`| Draws n-byte sprite to the screen at coordinates (vX, vY)
impl Cpu {
    /// |`Dxyn`| Draws n-byte sprite to the screen at coordinates (vX, vY).
    ///
    /// Each sprite byte is one row, MSB leftmost, XORed onto the screen.
    /// Rows or columns that fall off the screen are clipped, not wrapped.
    /// vF reports whether any lit pixel was turned off, considering every
    /// overlapping bit. Faults if the sprite bytes run off the end of memory.
    #[inline(always)]
    pub(super) fn draw(&mut self, x: Reg, y: Reg, n: Nib) -> ExecResult {
        let sprite = self.read_slice(self.i, n as usize)?.to_owned();
        let (x, y) = (self.v[x] as usize, self.v[y] as usize);
        self.v[0xf] = 0;
        for (row, byte) in sprite.iter().enumerate() {
            for col in 0..8 {
                let bit = byte & (0x80 >> col) != 0;
                if self.screen.flip(x + col, y + row, bit) {
                    self.v[0xf] = 1;
                }
            }
        }
        Ok(())
    }
}

/// |`Exbb`| Skips instruction on value of keypress
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`eX9e`| Skip next instruction if key == vX |
/// |`eXa1`| Skip next instruction if key != vX |
impl Cpu {
    /// |`Ex9e`| Skip next instruction if key vX is down. Faults if vX names
    /// a key that doesn't exist.
    #[inline(always)]
    pub(super) fn skip_key_equals(&mut self, x: Reg, keys: &Keypad) -> ExecResult {
        let key = self.v[x];
        if keys
            .get(key as usize)
            .copied()
            .ok_or(ExecError::InvalidKey { key })?
        {
            self.pc = self.pc.wrapping_add(2);
        }
        Ok(())
    }
    /// |`Exa1`| Skip next instruction if key vX is up. Faults if vX names
    /// a key that doesn't exist.
    #[inline(always)]
    pub(super) fn skip_key_not_equals(&mut self, x: Reg, keys: &Keypad) -> ExecResult {
        let key = self.v[x];
        if !keys
            .get(key as usize)
            .copied()
            .ok_or(ExecError::InvalidKey { key })?
        {
            self.pc = self.pc.wrapping_add(2);
        }
        Ok(())
    }
}

/// |`Fxbb`| Timers, waits and DMA
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`fX07`| Set vX to value in delay timer     |
/// |`fX0a`| Wait for input, store key in vX    |
/// |`fX15`| Set delay timer to the value in vX |
/// |`fX18`| Set sound timer to the value in vX |
/// |`fX1e`| Add vX to I                        |
/// |`fX29`| Load sprite for character x into I |
/// |`fX33`| BCD convert X into I[0..3]         |
/// |`fX55`| Store registers 0..=X at I         |
/// |`fX65`| Load registers 0..=X from I        |
impl Cpu {
    /// |`Fx07`| Get the current DT, and put it in vX
    #[inline(always)]
    pub(super) fn load_delay_timer(&mut self, x: Reg) {
        self.v[x] = self.delay;
    }
    /// |`Fx0a`| Wait for a key: with nothing down, hold the pc on this
    /// instruction so the next step re-fetches it; otherwise capture the
    /// lowest pressed key's index into vX and move on.
    #[inline(always)]
    pub(super) fn wait_for_key(&mut self, x: Reg, keys: &Keypad) {
        match keys.iter().position(|&key| key) {
            Some(key) => self.v[x] = key as u8,
            None => self.pc = self.pc.wrapping_sub(2),
        }
    }
    /// |`Fx15`| Load vX into DT
    #[inline(always)]
    pub(super) fn store_delay_timer(&mut self, x: Reg) {
        self.delay = self.v[x];
    }
    /// |`Fx18`| Load vX into ST
    #[inline(always)]
    pub(super) fn store_sound_timer(&mut self, x: Reg) {
        self.sound = self.v[x];
    }
    /// |`Fx1e`| Add vX to I. 16-bit add, no flag.
    #[inline(always)]
    pub(super) fn add_i(&mut self, x: Reg) {
        self.i = self.i.wrapping_add(self.v[x] as Adr);
    }
    /// |`Fx29`| Load the address of the glyph for vX into I. Faults if vX
    /// is not a hex digit.
    #[inline(always)]
    pub(super) fn load_sprite(&mut self, x: Reg) -> ExecResult {
        let value = self.v[x];
        if value > 0xf {
            return Err(ExecError::InvalidFontIndex { value });
        }
        self.i = (font::FONT_OFFSET + font::FONT_HEIGHT * value as usize) as Adr;
        Ok(())
    }
    /// |`Fx33`| BCD convert vX into I`[0..3]`: hundreds, tens, ones
    #[inline(always)]
    pub(super) fn bcd_convert(&mut self, x: Reg) -> ExecResult {
        let value = self.v[x];
        let digits = [value / 100, value / 10 % 10, value % 10];
        self.write_slice(self.i, 3)?.copy_from_slice(&digits);
        Ok(())
    }
    /// |`Fx55`| Store v0..=vX at I. I itself is unchanged.
    #[inline(always)]
    pub(super) fn store_dma(&mut self, x: Reg) -> ExecResult {
        let v = self.v;
        self.write_slice(self.i, x + 1)?.copy_from_slice(&v[..=x]);
        Ok(())
    }
    /// |`Fx65`| Load v0..=vX from I. I itself is unchanged.
    #[inline(always)]
    pub(super) fn load_dma(&mut self, x: Reg) -> ExecResult {
        let src = self.read_slice(self.i, x + 1)?.to_owned();
        self.v[..=x].copy_from_slice(&src);
        Ok(())
    }
}
