//! Stores and displays the Chip-8's 64x32 monochrome framebuffer

use owo_colors::{OwoColorize, Style};
use std::fmt::{Display, Formatter, Result};

/// Width of the screen, in pixels.
pub const WIDTH: usize = 64;
/// Height of the screen, in pixels.
pub const HEIGHT: usize = 32;

/// One bit per pixel, row-major. Mutated only by `00e0` (clear) and `Dxyn`
/// (XOR sprite draw); everything else leaves it alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pixels: [[bool; WIDTH]; HEIGHT],
}

impl Screen {
    /// Reads the pixel at (x, y). Off-screen coordinates read as unlit.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Borrows the whole grid, row-major.
    pub fn grid(&self) -> &[[bool; WIDTH]; HEIGHT] {
        &self.pixels
    }

    /// Counts the lit pixels.
    pub fn lit(&self) -> usize {
        self.pixels.iter().flatten().filter(|&&px| px).count()
    }

    /// Unlights every pixel.
    pub(super) fn clear(&mut self) {
        self.pixels = [[false; WIDTH]; HEIGHT];
    }

    /// XORs one sprite bit into (x, y) and reports whether it turned a lit
    /// pixel off. Off-screen coordinates are clipped, never wrapped.
    pub(super) fn flip(&mut self, x: usize, y: usize, bit: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        let px = &mut self.pixels[y][x];
        let collision = *px && bit;
        *px ^= bit;
        collision
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen {
            pixels: [[false; WIDTH]; HEIGHT],
        }
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // Green phosphor style formatting, for taste
        let term: Style = Style::new().bold().green().on_black();
        for row in &self.pixels {
            for &px in row {
                let cell = if px { "##" } else { "  " };
                write!(f, "{}", cell.style(term))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
