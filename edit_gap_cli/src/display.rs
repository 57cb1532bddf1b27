// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{
    io::{self, Write},
    ops::Range,
};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

/// Something a command produced that the driver should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Content(String),
    Repr { storage: String, gap: Range<usize> },
    Length(usize),
    Unit(u8),
}

pub struct Display<W> {
    out: W,
    styled: bool,
}

impl<W: Write> Display<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    pub fn render(&mut self, output: &Output) -> io::Result<()> {
        match output {
            Output::Content(content) => writeln!(self.out, "{}", content)?,
            Output::Length(length) => writeln!(self.out, "len: {}", length)?,
            Output::Unit(unit) => {
                writeln!(self.out, "at: {:?} (0x{:02x})", char::from(*unit), unit)?
            }
            Output::Repr { storage, gap } => self.render_repr(storage, gap)?,
        }

        self.out.flush()
    }

    /// Writes the storage with its gap slots highlighted, followed by the gap's bounds. `storage`
    /// holds one ASCII character per storage slot.
    fn render_repr(&mut self, storage: &str, gap: &Range<usize>) -> io::Result<()> {
        let (before, rest) = storage.split_at(gap.start);
        let (gap_slots, after) = rest.split_at(gap.len());

        queue!(self.out, style::Print(before))?;
        if self.styled {
            queue!(
                self.out,
                style::PrintStyledContent(gap_slots.with(Color::DarkGrey).on(Color::Grey))
            )?;
        } else {
            queue!(self.out, style::Print(gap_slots))?;
        }
        queue!(
            self.out,
            style::Print(after),
            style::Print(format!(" gap=[{}, {})\n", gap.start, gap.end))
        )?;

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
