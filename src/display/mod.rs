//! Byte rendering
//! Turns a run of random bytes into one of three textual views
//!
//! ## display/ Invariants
//!
//! - Rendering only reads bytes, never mutates the store.
//! - Every line ends with a newline; an empty run still prints one line.

use std::io::{self, Write};

use crossterm::style::{style, Color, Stylize};

/// How a run of bytes is shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStyle {
    /// Coloured hexadecimal
    #[default]
    Default,
    /// One arrow per bit
    Spins,
    /// Binary digits
    Bits,
}

impl DisplayStyle {
    /// Resolve the optional trailing style word of a command
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "spins" => Some(DisplayStyle::Spins),
            "binary" => Some(DisplayStyle::Bits),
            _ => None,
        }
    }
}

const HEX_PER_LINE: usize = 16;
const SPINS_PER_LINE: usize = 8;
const BITS_PER_LINE: usize = 8;

pub const SPIN_UP: char = '↑';
pub const SPIN_DOWN: char = '↓';

/// Render `bytes` in the given style
pub fn display<W: Write + ?Sized>(out: &mut W, style: DisplayStyle, bytes: &[u8]) -> io::Result<()> {
    if bytes.is_empty() {
        return writeln!(out, "(no bytes)");
    }
    match style {
        DisplayStyle::Default => display_colored(out, bytes),
        DisplayStyle::Spins => display_spins(out, bytes),
        DisplayStyle::Bits => display_bits(out, bytes),
    }
}

fn display_colored<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for line in bytes.chunks(HEX_PER_LINE) {
        let cells: Vec<String> = line
            .iter()
            .map(|b| style(format!("{b:02x}")).with(Color::AnsiValue(*b)).to_string())
            .collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    Ok(())
}

fn display_spins<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for line in bytes.chunks(SPINS_PER_LINE) {
        let words: Vec<String> = line.iter().map(|b| spins(*b)).collect();
        writeln!(out, "{}", words.join(" "))?;
    }
    Ok(())
}

fn display_bits<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for line in bytes.chunks(BITS_PER_LINE) {
        let words: Vec<String> = line.iter().map(|b| format!("{b:08b}")).collect();
        writeln!(out, "{}", words.join(" "))?;
    }
    Ok(())
}

/// Most significant bit first
fn spins(byte: u8) -> String {
    (0..8)
        .rev()
        .map(|bit| if byte >> bit & 1 == 1 { SPIN_UP } else { SPIN_DOWN })
        .collect()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
