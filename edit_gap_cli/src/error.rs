// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::io;

use edit_gap::GapBufferError;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to expand script path {path}: {source}")]
    Expand {
        path: String,
        source: shellexpand::LookupError<std::env::VarError>,
    },
    #[error("failed to read script {name}: {source}")]
    Read { name: String, source: io::Error },
    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },
    #[error("line {line}: {source}")]
    Buffer { line: usize, source: GapBufferError },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command `{verb}`, expected one of: {expected}")]
    UnknownCommand { verb: String, expected: String },
    #[error("`{command}` is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("invalid {argument} `{value}` for `{command}`")]
    InvalidNumber {
        command: &'static str,
        argument: &'static str,
        value: String,
    },
    #[error("`{command}` got unexpected trailing input `{rest}`")]
    TrailingInput { command: &'static str, rest: String },
    #[error("`insert_at` expects exactly one byte, got `{0}`")]
    NotAUnit(String),
}
