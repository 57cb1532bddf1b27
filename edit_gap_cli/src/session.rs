// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::io::Write;

use edit_gap::{GapBuffer, GapBufferError};
use tracing::{debug, info};

use crate::{
    display::{Display, Output},
    error::ScriptError,
    script::{self, Command},
};

/// A gap buffer being driven by script commands.
pub struct EditSession {
    pub buffer: GapBuffer<u8>,
    pub show_gap: bool,
}

impl EditSession {
    pub fn new(capacity: usize, show_gap: bool) -> Self {
        Self {
            buffer: GapBuffer::with_capacity(capacity),
            show_gap,
        }
    }

    pub fn apply(&mut self, command: &Command) -> Result<Option<Output>, GapBufferError> {
        let output = match command {
            Command::Insert { index, text } => {
                self.buffer.insert(*index, text)?;
                None
            }
            Command::InsertAt { index, unit } => {
                self.buffer.insert_at(*index, *unit)?;
                None
            }
            Command::DelAt { index } => {
                self.buffer.del_at(*index)?;
                None
            }
            Command::Del { begin, count } => {
                self.buffer.del(*begin, *count)?;
                None
            }
            Command::At { index } => Some(Output::Unit(self.buffer.at(*index)?)),
            Command::Clear => {
                self.buffer.clear();
                None
            }
            Command::Len => Some(Output::Length(self.buffer.len())),
            Command::Print => Some(Output::Content(self.buffer.to_string())),
            Command::Repr => Some(self.repr()),
        };

        Ok(output)
    }

    /// Runs every command of `script` in order, rendering what they produce. Stops at the first
    /// line that fails to parse or apply.
    pub fn replay<W: Write>(
        &mut self,
        script: &str,
        display: &mut Display<W>,
    ) -> Result<(), ScriptError> {
        info!(lines = script.lines().count(), "replaying edit script");

        for (line_index, text) in script.lines().enumerate() {
            let line = line_index + 1;
            let Some(command) = script::parse_line(text)
                .map_err(|source| ScriptError::Parse { line, source })?
            else {
                continue;
            };

            debug!(line, ?command, "applying command");
            let output = self
                .apply(&command)
                .map_err(|source| ScriptError::Buffer { line, source })?;

            if let Some(output) = output {
                display.render(&output)?;
            }
            if self.show_gap && command.is_edit() {
                display.render(&self.repr())?;
            }
        }

        Ok(())
    }

    fn repr(&self) -> Output {
        Output::Repr {
            storage: self.buffer.repr(),
            gap: self.buffer.gap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use edit_gap::INITIAL_CAPACITY;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::script_source::DEMO_SCRIPT;

    fn replayed(script: &str, show_gap: bool) -> Result<String, ScriptError> {
        let mut session = EditSession::new(INITIAL_CAPACITY, show_gap);
        let mut display = Display::new(Vec::new(), false);
        session.replay(script, &mut display)?;

        Ok(String::from_utf8(display.into_inner()).unwrap())
    }

    #[test]
    fn demo_script_output() {
        assert_eq!(
            replayed(DEMO_SCRIPT, false).unwrap(),
            "Hell World!_____ gap=[11, 16)\nHell World!\n"
        );
    }

    #[test]
    fn apply_reports_outputs() {
        let mut session = EditSession::new(INITIAL_CAPACITY, false);

        assert_eq!(
            session.apply(&Command::Insert {
                index: 0,
                text: b"Hello".to_vec()
            }),
            Ok(None)
        );
        assert_eq!(
            session.apply(&Command::At { index: 1 }),
            Ok(Some(Output::Unit(b'e')))
        );
        assert_eq!(session.apply(&Command::Len), Ok(Some(Output::Length(5))));
        assert_eq!(
            session.apply(&Command::DelAt { index: 9 }),
            Err(GapBufferError::OutOfRange {
                index: 9,
                length: 5
            })
        );
    }

    #[test]
    fn show_gap_renders_after_each_edit() {
        let output = replayed("insert 0 abc\nlen\nclear\n", true).unwrap();

        assert_eq!(
            output,
            "abc_____ gap=[3, 8)\nlen: 3\n________ gap=[0, 8)\n"
        );
    }

    #[test]
    fn failing_line_stops_replay() {
        let error = replayed("insert 0 abc\ndel_at 3\nprint\n", false).unwrap_err();

        assert!(matches!(
            error,
            ScriptError::Buffer {
                line: 2,
                source: GapBufferError::OutOfRange {
                    index: 3,
                    length: 3
                }
            }
        ));
        assert_eq!(error.to_string(), "line 2: out of range [3] with length 3");
    }

    #[test]
    fn parse_errors_carry_line_numbers() {
        let error = replayed("# comment\n\nfrobnicate\n", false).unwrap_err();

        assert!(matches!(error, ScriptError::Parse { line: 3, .. }));
    }
}
