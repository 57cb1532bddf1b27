// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{
    fmt, iter,
    ops::{Index, IndexMut, Range},
    slice, vec,
};

use tracing::{debug, trace};

use crate::GapBufferError;

/// Capacity of a buffer created with [GapBuffer::new], and the capacity [GapBuffer::clear]
/// returns such a buffer to.
pub const INITIAL_CAPACITY: usize = 8;

const GROWTH_FACTOR: usize = 2;

type Iter<'a, T> = iter::Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

/// A contiguous, growable gap buffer holding units of type T.
///
/// Intended for efficient insertion and deletion of units clustered around a moving edit point.
///
/// # Examples
/// ```
/// use edit_gap::GapBuffer;
///
/// let mut gap_buffer = GapBuffer::new();
///
/// gap_buffer.insert(0, b"foo").unwrap();
/// gap_buffer.insert(0, b"bar").unwrap();
/// assert_eq!(
///     gap_buffer.to_string(),
///     "barfoo"
/// );
///
/// gap_buffer.del(1, 2).unwrap();
/// assert_eq!(
///     gap_buffer.to_string(),
///     "bfoo"
/// );
/// assert_eq!(
///     gap_buffer.len(),
///     4
/// );
/// ```
///
/// # Layout
///
/// The backing storage is split into three runs: the content before the gap, the gap itself, and
/// the content after the gap. With "_" marking gap slots, a buffer holding "Hello" whose gap sits
/// at index 2 looks like:
/// ```text
///     gap_start    gap_end
///        |            |
///        v            v
/// [H, e, _, _, _, _, l, l, o]
/// ```
///
/// Inserting at index 2 writes into the first gap slot and needs no data movement. Inserting or
/// deleting anywhere else first relocates the gap by shifting the units between the old and new
/// positions, which costs O(|I-G|) where I is the target index and G the current gap position.
///
/// Storage only ever grows. Capacity doubles whenever an insertion needs more room than the gap
/// holds, and deleted units are absorbed back into the gap.
///
/// # Cursor
///
/// The gap doubles as the buffer's cursor. The cursor at index `I` sits between units `I - 1` and
/// `I`, so it can be anywhere in `[0, len]`. [push_before_cursor](GapBuffer::push_before_cursor),
/// [push_after_cursor](GapBuffer::push_after_cursor),
/// [pop_before_cursor](GapBuffer::pop_before_cursor) and
/// [pop_after_cursor](GapBuffer::pop_after_cursor) edit at the cursor without moving any data.
///
/// # Indexing
///
/// Indices are logical: they address the live content and skip the gap entirely.
/// ```
/// use edit_gap::GapBuffer;
///
/// let mut gap_buffer = GapBuffer::from([0, 1, 2, 3]);
/// assert_eq!(gap_buffer[2], 2);
/// gap_buffer.set_cursor(1).unwrap();
/// assert_eq!(gap_buffer[2], 2);
/// ```
/// Use [at](GapBuffer::at), [get](GapBuffer::get) or [get_mut](GapBuffer::get_mut) if you want to
/// check whether the index is within the GapBuffer.
#[derive(Clone)]
pub struct GapBuffer<T> {
    storage: Vec<T>,
    gap_start: usize,
    gap_end: usize,
    initial_capacity: usize,
}

impl<T> GapBuffer<T> {
    /// Returns the number of live units in the buffer. Runs in O(1).
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// assert_eq!(buffer.len(), 0);
    ///
    /// buffer.insert(0, b"Hello").unwrap();
    /// assert_eq!(buffer.len(), 5);
    /// ```
    pub fn len(&self) -> usize {
        self.capacity() - self.gap_size()
    }

    /// Returns true if the buffer holds no live units.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the size of the backing storage, gap included.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of free slots currently held by the gap.
    pub fn gap_size(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Returns the storage range occupied by the gap.
    ///
    /// Storage indices are raw offsets into the backing storage and differ from logical indices
    /// by [gap_size](GapBuffer::gap_size) past the gap. Mostly useful for diagnostics.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// assert_eq!(buffer.gap(), 0..8);
    ///
    /// buffer.insert(0, b"abc").unwrap();
    /// assert_eq!(buffer.gap(), 3..8);
    ///
    /// buffer.set_cursor(1).unwrap();
    /// assert_eq!(buffer.gap(), 1..6);
    /// ```
    pub fn gap(&self) -> Range<usize> {
        self.gap_start..self.gap_end
    }

    /// Returns the current cursor index, which is where the gap starts.
    pub fn cursor_index(&self) -> usize {
        self.gap_start
    }

    /// Returns the unit immediately before the cursor if one exists.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// assert_eq!(buffer.precursor(), Some(&2));
    ///
    /// buffer.set_cursor(0).unwrap();
    /// assert_eq!(buffer.precursor(), None);
    /// ```
    pub fn precursor(&self) -> Option<&T> {
        self.gap_start
            .checked_sub(1)
            .and_then(|index| self.storage.get(index))
    }

    /// Returns the unit immediately after the cursor if one exists.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// assert_eq!(buffer.postcursor(), None);
    ///
    /// buffer.set_cursor(1).unwrap();
    /// assert_eq!(buffer.postcursor(), Some(&1));
    /// ```
    pub fn postcursor(&self) -> Option<&T> {
        self.storage.get(self.gap_end)
    }

    /// Returns a reference to the unit at the given logical index, or None if the index is out
    /// of bounds.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(2).unwrap();
    ///
    /// assert_eq!(
    ///     buffer.get(2),
    ///     Some(&2)
    /// );
    ///
    /// assert_eq!(
    ///     buffer.get(4),
    ///     None
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            None
        } else {
            self.storage.get(self.storage_index(index))
        }
    }

    /// Returns a mutable reference to the unit at the given logical index, or None if the index
    /// is out of bounds.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);
    /// buffer.set_cursor(3).unwrap();
    ///
    /// if let Some(unit) = buffer.get_mut(1) {
    ///     *unit = 10;
    /// }
    ///
    /// assert!(buffer.get_mut(5).is_none());
    /// assert_eq!(
    ///     buffer.to_vec(),
    ///     [0, 10, 2, 3, 4]
    /// );
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            None
        } else {
            let storage_index = self.storage_index(index);
            self.storage.get_mut(storage_index)
        }
    }

    /// Returns the live content as two slices: the units before the gap and the units after it.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(1).unwrap();
    ///
    /// assert_eq!(
    ///     buffer.as_slices(),
    ///     (&[0][..], &[1, 2, 3][..])
    /// );
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        (
            &self.storage[..self.gap_start],
            &self.storage[self.gap_end..],
        )
    }

    /// Returns an iterator over the live units in order, independent of where the gap sits.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.set_cursor(1).unwrap();
    ///
    /// let collected: Vec<_> = buffer.iter().collect();
    /// assert_eq!(
    ///     collected,
    ///     [&0, &1, &2]
    /// );
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let (before, after) = self.as_slices();
        before.iter().chain(after.iter())
    }

    /// Maps a logical index in `[0, len)` to its offset in the backing storage.
    fn storage_index(&self, index: usize) -> usize {
        if index < self.gap_start {
            index
        } else {
            index + self.gap_size()
        }
    }

    fn check_insert_index(&self, index: usize) -> Result<(), GapBufferError> {
        if index > self.len() {
            Err(self.out_of_range(index))
        } else {
            Ok(())
        }
    }

    fn check_read_index(&self, index: usize) -> Result<(), GapBufferError> {
        if index >= self.len() {
            Err(self.out_of_range(index))
        } else {
            Ok(())
        }
    }

    fn out_of_range(&self, index: usize) -> GapBufferError {
        GapBufferError::OutOfRange {
            index,
            length: self.len(),
        }
    }
}

impl<T> GapBuffer<T>
where
    T: Copy + Default,
{
    /// Creates a new empty GapBuffer whose gap spans [INITIAL_CAPACITY] slots.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::{GapBuffer, INITIAL_CAPACITY};
    ///
    /// let buffer = GapBuffer::<u8>::new();
    ///
    /// assert_eq!(buffer.len(), 0);
    /// assert_eq!(buffer.capacity(), INITIAL_CAPACITY);
    /// assert_eq!(buffer.gap_size(), INITIAL_CAPACITY);
    /// assert_eq!(buffer.to_string(), "");
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a new empty GapBuffer with room for `capacity` units before it needs to grow. A
    /// capacity of zero is raised to one so the buffer always has a gap to grow from. The
    /// buffer returns to this capacity on [clear](GapBuffer::clear).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            storage: vec![T::default(); capacity],
            gap_start: 0,
            gap_end: capacity,
            initial_capacity: capacity,
        }
    }

    /// Inserts a single unit so that it ends up at logical position `index`. Appending with
    /// `index == len()` is allowed.
    ///
    /// Runs in amortized O(1) when `index` is at the cursor and O(|I-C|) otherwise, where I is
    /// `index` and C is the cursor. The cursor ends up right after the inserted unit.
    ///
    /// Returns [GapBufferError::OutOfRange] without touching the buffer if `index > len()`.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::{GapBuffer, GapBufferError};
    ///
    /// let mut buffer = GapBuffer::from("ac");
    /// buffer.insert_at(1, b'b').unwrap();
    /// assert_eq!(buffer.to_string(), "abc");
    ///
    /// assert_eq!(
    ///     buffer.insert_at(4, b'd'),
    ///     Err(GapBufferError::OutOfRange { index: 4, length: 3 })
    /// );
    /// assert_eq!(buffer.to_string(), "abc");
    /// ```
    pub fn insert_at(&mut self, index: usize, unit: T) -> Result<(), GapBufferError> {
        self.check_insert_index(index)?;

        self.reserve(1);
        self.move_gap_to(index);
        debug_assert!(
            self.gap_start == index && self.gap_size() > 0,
            "gap must start at the insertion point after relocation"
        );

        self.storage[self.gap_start] = unit;
        self.gap_start += 1;

        Ok(())
    }

    /// Inserts a run of units starting at logical position `index`.
    ///
    /// The result is the same as calling [insert_at](GapBuffer::insert_at) for each unit at
    /// `index`, `index + 1`, and so on, but the gap is relocated once and the units are copied as
    /// one block. Bounds are checked up front, so an out of range `index` leaves the buffer
    /// untouched.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// buffer.insert(0, b"Hello").unwrap();
    /// buffer.insert(2, b" World!").unwrap();
    ///
    /// assert_eq!(
    ///     buffer.to_string(),
    ///     "He World!llo"
    /// );
    /// ```
    pub fn insert(&mut self, index: usize, units: &[T]) -> Result<(), GapBufferError> {
        self.check_insert_index(index)?;
        if units.is_empty() {
            return Ok(());
        }

        self.reserve(units.len());
        self.move_gap_to(index);

        let end = self.gap_start + units.len();
        self.storage[self.gap_start..end].copy_from_slice(units);
        self.gap_start = end;

        Ok(())
    }

    /// Deletes the unit at logical position `index` and returns it.
    ///
    /// The freed slot is absorbed into the gap. Deleting right next to the gap moves no data;
    /// deleting elsewhere shifts the units between the deleted slot and the gap by one.
    ///
    /// Returns [GapBufferError::OutOfRange] without touching the buffer if `index >= len()`.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from("abcdefgh");
    ///
    /// assert_eq!(buffer.del_at(0), Ok(b'a'));
    /// assert_eq!(buffer.del_at(0), Ok(b'b'));
    /// assert_eq!(buffer.del_at(0), Ok(b'c'));
    /// assert_eq!(buffer.to_string(), "defgh");
    ///
    /// assert!(buffer.del_at(5).is_err());
    /// ```
    pub fn del_at(&mut self, index: usize) -> Result<T, GapBufferError> {
        self.check_read_index(index)?;

        let at = self.storage_index(index);
        let removed = self.storage[at];

        if self.gap_start == self.gap_end {
            self.gap_start = at;
            self.gap_end = at + 1;
        } else if at < self.gap_start {
            // Close the hole by sliding the rest of the left run down onto it
            self.storage.copy_within(at + 1..self.gap_start, at);
            self.gap_start -= 1;
        } else {
            debug_assert!(at >= self.gap_end, "deleted slot must lie outside the gap");
            self.storage.copy_within(self.gap_end..at, self.gap_end + 1);
            self.gap_end += 1;
        }

        Ok(removed)
    }

    /// Deletes `count` units starting at logical position `begin`, by deleting at `begin`
    /// `count` times.
    ///
    /// Stops at the first failing deletion and returns its error. Deletions that already
    /// succeeded stay applied, so a `count` running past the end removes everything from `begin`
    /// onwards before reporting [GapBufferError::OutOfRange].
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::{GapBuffer, GapBufferError};
    ///
    /// let mut buffer = GapBuffer::from("abcdefgh");
    /// buffer.del(3, 5).unwrap();
    /// assert_eq!(buffer.to_string(), "abc");
    ///
    /// assert_eq!(
    ///     buffer.del(1, 5),
    ///     Err(GapBufferError::OutOfRange { index: 1, length: 1 })
    /// );
    /// assert_eq!(buffer.to_string(), "a");
    /// ```
    pub fn del(&mut self, begin: usize, count: usize) -> Result<(), GapBufferError> {
        for _ in 0..count {
            self.del_at(begin)?;
        }

        Ok(())
    }

    /// Returns a copy of the unit at logical position `index`. Runs in O(1).
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from("Hello");
    /// buffer.set_cursor(2).unwrap();
    ///
    /// assert_eq!(buffer.at(0), Ok(b'H'));
    /// assert_eq!(buffer.at(4), Ok(b'o'));
    /// assert!(buffer.at(5).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<T, GapBufferError> {
        self.get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Discards all content and resets the buffer to its initial capacity, gap spanning the
    /// whole storage.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from("Hello World!");
    /// buffer.clear();
    ///
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.to_string(), "");
    /// ```
    pub fn clear(&mut self) {
        debug!(
            discarded = self.len(),
            capacity = self.capacity(),
            "clearing gap buffer"
        );

        self.storage.clear();
        self.storage.resize(self.initial_capacity, T::default());
        self.gap_start = 0;
        self.gap_end = self.initial_capacity;
    }

    /// Returns the live content as one contiguous vector.
    pub fn to_vec(&self) -> Vec<T> {
        let (before, after) = self.as_slices();
        let mut content = Vec::with_capacity(self.len());
        content.extend_from_slice(before);
        content.extend_from_slice(after);
        content
    }

    /// Ensures the gap holds at least `additional` free slots, growing the storage if needed.
    ///
    /// Panics with "capacity overflow" if the grown capacity would exceed `usize::MAX`.
    pub fn reserve(&mut self, additional: usize) {
        if self.gap_size() < additional {
            self.grow(additional);
        }
    }

    /// Moves the cursor to logical index `index`. Runs in O(|I-N|) where I is the current
    /// cursor index and N is the new one.
    ///
    /// Returns [GapBufferError::OutOfRange] if `index > len()`.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0]);
    /// buffer.push_before_cursor(1);
    /// assert_eq!(buffer.to_vec(), [0, 1]);
    ///
    /// buffer.set_cursor(0).unwrap();
    /// buffer.push_before_cursor(2);
    /// assert_eq!(buffer.to_vec(), [2, 0, 1]);
    /// assert_eq!(buffer.cursor_index(), 1);
    ///
    /// assert!(buffer.set_cursor(4).is_err());
    /// ```
    pub fn set_cursor(&mut self, index: usize) -> Result<(), GapBufferError> {
        self.check_insert_index(index)?;
        self.move_gap_to(index);
        Ok(())
    }

    /// Adds a unit immediately before the cursor. The cursor moves forward to stay after the
    /// new unit.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// buffer.push_before_cursor(0);
    /// buffer.push_before_cursor(1);
    ///
    /// assert_eq!(buffer.cursor_index(), 2);
    /// assert_eq!(buffer.to_vec(), [0, 1]);
    /// ```
    pub fn push_before_cursor(&mut self, unit: T) {
        self.reserve(1);
        self.storage[self.gap_start] = unit;
        self.gap_start += 1;
    }

    /// Adds a unit immediately after the cursor. Does not move the cursor.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// buffer.push_after_cursor(0);
    /// buffer.push_after_cursor(1);
    ///
    /// assert_eq!(buffer.cursor_index(), 0);
    /// assert_eq!(buffer.to_vec(), [1, 0]);
    /// ```
    pub fn push_after_cursor(&mut self, unit: T) {
        self.reserve(1);
        self.gap_end -= 1;
        self.storage[self.gap_end] = unit;
    }

    /// Removes the unit immediately before the cursor, moving the cursor back by one. Returns
    /// the removed unit if one exists.
    pub fn pop_before_cursor(&mut self) -> Option<T> {
        if self.gap_start == 0 {
            None
        } else {
            self.gap_start -= 1;
            Some(self.storage[self.gap_start])
        }
    }

    /// Removes the unit immediately after the cursor. Does not move the cursor. Returns the
    /// removed unit if one exists.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(2).unwrap();
    ///
    /// assert_eq!(buffer.pop_after_cursor(), Some(2));
    /// assert_eq!(buffer.pop_before_cursor(), Some(1));
    /// assert_eq!(buffer.pop_after_cursor(), Some(3));
    /// assert_eq!(buffer.pop_after_cursor(), None);
    ///
    /// assert_eq!(buffer.to_vec(), [0]);
    /// ```
    pub fn pop_after_cursor(&mut self) -> Option<T> {
        let unit = *self.storage.get(self.gap_end)?;
        self.gap_end += 1;
        Some(unit)
    }
}

impl<T> GapBuffer<T>
where
    T: Copy + Default,
{
    /// Grows the storage by repeated doubling until the gap holds `additional` slots. Content
    /// after the gap is moved to the end of the new storage so the gap stays where it was.
    ///
    /// Panics with "capacity overflow" if the doubled capacity does not fit in a `usize`.
    fn grow(&mut self, additional: usize) {
        let old_capacity = self.capacity();
        let required = self
            .len()
            .checked_add(additional)
            .expect("capacity overflow");

        let mut new_capacity = old_capacity.max(1);
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(GROWTH_FACTOR)
                .expect("capacity overflow");
        }

        let after_gap = old_capacity - self.gap_end;
        self.storage.resize(new_capacity, T::default());

        let new_gap_end = new_capacity - after_gap;
        self.storage
            .copy_within(self.gap_end..old_capacity, new_gap_end);
        self.gap_end = new_gap_end;

        trace!(old_capacity, new_capacity, "grew gap buffer storage");
    }

    /// Relocates the gap so that it starts at logical index `index`, which must be in
    /// `[0, len]`.
    fn move_gap_to(&mut self, index: usize) {
        if index < self.gap_start {
            let moved = self.gap_start - index;
            self.storage
                .copy_within(index..self.gap_start, self.gap_end - moved);
            self.gap_start = index;
            self.gap_end -= moved;

            trace!(moved, gap_start = self.gap_start, "moved gap towards start");
        } else if index > self.gap_start {
            let moved = index - self.gap_start;
            self.storage
                .copy_within(self.gap_end..self.gap_end + moved, self.gap_start);
            self.gap_start = index;
            self.gap_end += moved;

            trace!(moved, gap_start = self.gap_start, "moved gap towards end");
        }
    }

    fn from_vec(storage: Vec<T>) -> Self {
        if storage.is_empty() {
            return Self::new();
        }

        let len = storage.len();
        Self {
            storage,
            gap_start: len,
            gap_end: len,
            initial_capacity: INITIAL_CAPACITY,
        }
    }
}

impl GapBuffer<u8> {
    /// Renders the whole backing storage with every gap slot shown as `_`. Units that are not
    /// printable ASCII are shown as `.`. Diagnostic only.
    ///
    /// ### Examples
    /// ```
    /// use edit_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// buffer.insert(0, b"Hello").unwrap();
    /// buffer.set_cursor(2).unwrap();
    ///
    /// assert_eq!(buffer.repr(), "He___llo");
    /// ```
    pub fn repr(&self) -> String {
        self.storage
            .iter()
            .enumerate()
            .map(|(index, byte)| {
                if self.gap().contains(&index) {
                    '_'
                } else if byte.is_ascii_graphic() || *byte == b' ' {
                    char::from(*byte)
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl<T> Default for GapBuffer<T>
where
    T: Copy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GapBuffer<u8> {
    /// Writes the live content, decoding it as UTF-8 with invalid sequences replaced.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_vec()))
    }
}

impl fmt::Display for GapBuffer<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for c in self.iter() {
            f.write_char(*c)?;
        }

        Ok(())
    }
}

impl<T> fmt::Debug for GapBuffer<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (before, after) = self.as_slices();
        f.debug_struct("GapBuffer")
            .field("before_gap", &before)
            .field("gap", &self.gap())
            .field("after_gap", &after)
            .finish()
    }
}

impl<T> PartialEq for GapBuffer<T>
where
    T: PartialEq,
{
    /// Compares live content only. Gap placement and capacity are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for GapBuffer<T> where T: Eq {}

impl<T> Index<usize> for GapBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
            .expect("Out of bounds index provided to GapBuffer")
    }
}

impl<T> IndexMut<usize> for GapBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
            .expect("Out of bounds index provided to GapBuffer")
    }
}

impl<T> From<Vec<T>> for GapBuffer<T>
where
    T: Copy + Default,
{
    fn from(value: Vec<T>) -> Self {
        Self::from_vec(value)
    }
}

impl<T> From<&[T]> for GapBuffer<T>
where
    T: Copy + Default,
{
    fn from(value: &[T]) -> Self {
        Self::from_vec(value.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for GapBuffer<T>
where
    T: Copy + Default,
{
    fn from(value: [T; N]) -> Self {
        Self::from_vec(Vec::from(value))
    }
}

impl From<&str> for GapBuffer<u8> {
    fn from(value: &str) -> Self {
        Self::from(value.as_bytes())
    }
}

impl<T> FromIterator<T> for GapBuffer<T>
where
    T: Copy + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for GapBuffer<T>
where
    T: Copy + Default,
{
    /// Appends the units at the end of the buffer, leaving the cursor after them.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.move_gap_to(self.len());
        self.reserve(iter.size_hint().0);

        for unit in iter {
            self.push_before_cursor(unit);
        }
    }
}

impl<'a, T> IntoIterator for &'a GapBuffer<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for GapBuffer<T>
where
    T: Copy + Default,
{
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Gap at the end leaves the live units as one prefix of the storage
        let len = self.len();
        self.move_gap_to(len);
        self.storage.truncate(len);

        self.storage.into_iter()
    }
}
