// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

/// Errors reported by fallible [GapBuffer](crate::GapBuffer) operations.
///
/// A rejected operation never mutates the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GapBufferError {
    /// The logical index lies outside the bounds valid for the operation: `[0, len]` when
    /// inserting or moving the cursor, `[0, len - 1]` when reading or deleting.
    #[error("out of range [{index}] with length {length}")]
    OutOfRange {
        /// The rejected logical index.
        index: usize,
        /// Length of the buffer when the index was rejected.
        length: usize,
    },
}
