// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

use crate::error::ScriptError;

/// Script replayed when no script is given: builds "Hello World!" and deletes the second 'o'.
pub const DEMO_SCRIPT: &str = "insert 0 Hello \ninsert 6 World!\ndel 4 1\nrepr\nprint\n";

/// Where an edit script is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    Demo,
    Stdin,
    File(PathBuf),
}

impl ScriptSource {
    /// Interprets the script argument: none runs the demo, `-` reads stdin, and anything else
    /// is a path, with `~` and environment variables expanded.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, ScriptError> {
        match arg {
            None => Ok(Self::Demo),
            Some("-") => Ok(Self::Stdin),
            Some(path) => {
                let expanded = shellexpand::full(path).map_err(|source| ScriptError::Expand {
                    path: path.to_string(),
                    source,
                })?;

                Ok(Self::File(PathBuf::from(expanded.as_ref())))
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Demo => "<demo>".to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub fn read_to_string(&self) -> Result<String, ScriptError> {
        let read_error = |source| ScriptError::Read {
            name: self.name(),
            source,
        };

        let mut script = String::new();
        match self {
            Self::Demo => script.push_str(DEMO_SCRIPT),
            Self::Stdin => {
                io::stdin().read_to_string(&mut script).map_err(read_error)?;
            }
            Self::File(path) => {
                File::open(path)
                    .and_then(|mut file| file.read_to_string(&mut script))
                    .map_err(read_error)?;
            }
        }

        Ok(script)
    }
}
