// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::ParseError;

/// One line of an edit script.
///
/// Script lines read `<command> [arguments]`, with the command name in snake_case. `insert`
/// takes everything after the space following its index as the text to insert, trailing spaces
/// included, with `\n`, `\t` and `\\` decoded.
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::EnumDiscriminants)]
#[strum_discriminants(derive(
    strum_macros::IntoStaticStr,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    Hash
))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
#[strum_discriminants(name(CommandName))]
pub enum Command {
    Insert { index: usize, text: Vec<u8> },
    InsertAt { index: usize, unit: u8 },
    DelAt { index: usize },
    Del { begin: usize, count: usize },
    At { index: usize },
    Clear,
    Len,
    Print,
    Repr,
}

impl Command {
    /// Whether running the command can change the buffer's content or layout.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Command::Insert { .. }
                | Command::InsertAt { .. }
                | Command::DelAt { .. }
                | Command::Del { .. }
                | Command::Clear
        )
    }
}

/// Parses a single script line. Blank lines and lines starting with `#` yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim_start();
    if line.trim_end().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));
    let name = CommandName::from_str(verb).map_err(|_| ParseError::UnknownCommand {
        verb: verb.to_string(),
        expected: CommandName::iter()
            .map(<&'static str>::from)
            .collect::<Vec<_>>()
            .join(", "),
    })?;
    let command: &'static str = name.into();

    let command = match name {
        CommandName::Insert => {
            let (index, text) = rest
                .split_once(' ')
                .ok_or(ParseError::MissingArgument {
                    command,
                    argument: "text",
                })?;

            Command::Insert {
                index: parse_number(command, "index", index)?,
                text: unescape(text).into_bytes(),
            }
        }
        CommandName::InsertAt => {
            let (index, unit) = rest
                .split_once(' ')
                .ok_or(ParseError::MissingArgument {
                    command,
                    argument: "unit",
                })?;

            let unit = unescape(unit);
            if unit.len() != 1 {
                return Err(ParseError::NotAUnit(unit));
            }

            Command::InsertAt {
                index: parse_number(command, "index", index)?,
                unit: unit.as_bytes()[0],
            }
        }
        CommandName::DelAt => {
            let [index] = numbers(command, ["index"], rest)?;
            Command::DelAt { index }
        }
        CommandName::Del => {
            let [begin, count] = numbers(command, ["begin", "count"], rest)?;
            Command::Del { begin, count }
        }
        CommandName::At => {
            let [index] = numbers(command, ["index"], rest)?;
            Command::At { index }
        }
        CommandName::Clear => {
            let [] = numbers(command, [], rest)?;
            Command::Clear
        }
        CommandName::Len => {
            let [] = numbers(command, [], rest)?;
            Command::Len
        }
        CommandName::Print => {
            let [] = numbers(command, [], rest)?;
            Command::Print
        }
        CommandName::Repr => {
            let [] = numbers(command, [], rest)?;
            Command::Repr
        }
    };

    Ok(Some(command))
}

/// Reads exactly `N` whitespace separated numbers, named by `arguments`, from `rest`.
fn numbers<const N: usize>(
    command: &'static str,
    arguments: [&'static str; N],
    rest: &str,
) -> Result<[usize; N], ParseError> {
    let mut words = rest.split_whitespace();
    let mut parsed = [0; N];

    for (slot, argument) in parsed.iter_mut().zip(arguments) {
        let word = words
            .next()
            .ok_or(ParseError::MissingArgument { command, argument })?;
        *slot = parse_number(command, argument, word)?;
    }

    let trailing: Vec<_> = words.collect();
    if !trailing.is_empty() {
        return Err(ParseError::TrailingInput {
            command,
            rest: trailing.join(" "),
        });
    }

    Ok(parsed)
}

fn parse_number(
    command: &'static str,
    argument: &'static str,
    value: &str,
) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        command,
        argument,
        value: value.to_string(),
    })
}

/// Decodes `\n`, `\t` and `\\`. Any other backslash is kept as is.
fn unescape(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('\\') => decoded.push('\\'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            None => decoded.push('\\'),
        }
    }

    decoded
}
