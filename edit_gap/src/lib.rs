// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

//! A gap buffer for localized edits around a moving cursor.
//!
//! [GapBuffer] keeps its content in one contiguous block of memory split by a gap of unused
//! capacity. The gap sits wherever the last edit happened, so a run of insertions or deletions at
//! the same place costs amortized O(1) per unit. Editing somewhere else first relocates the gap,
//! which costs time proportional to the distance moved rather than to the buffer's length.
//!
//! All positions taken by the API are logical indices into the live content. The gap is never
//! visible through them.

#![warn(missing_docs)]

pub use error::*;
pub use gap_buffer::*;

mod error;
mod gap_buffer;
