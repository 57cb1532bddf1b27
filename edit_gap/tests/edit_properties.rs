// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use edit_gap::{GapBuffer, GapBufferError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    InsertAt(usize, u8),
    Insert(usize, Vec<u8>),
    DelAt(usize),
    Del(usize, usize),
    SetCursor(usize),
    Clear,
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        4 => (0..64usize, any::<u8>()).prop_map(|(i, b)| Edit::InsertAt(i, b)),
        3 => (0..64usize, prop::collection::vec(any::<u8>(), 0..24))
            .prop_map(|(i, bytes)| Edit::Insert(i, bytes)),
        3 => (0..64usize).prop_map(Edit::DelAt),
        2 => (0..64usize, 0..8usize).prop_map(|(i, n)| Edit::Del(i, n)),
        2 => (0..64usize).prop_map(Edit::SetCursor),
        1 => Just(Edit::Clear),
    ]
}

/// Applies an edit to both the gap buffer and a plain vector model, checking that both agree on
/// success or failure.
fn apply(buffer: &mut GapBuffer<u8>, model: &mut Vec<u8>, edit: &Edit) {
    let length = model.len();
    let out_of_range = |index| GapBufferError::OutOfRange { index, length };

    match edit {
        Edit::InsertAt(index, unit) => {
            let result = buffer.insert_at(*index, *unit);
            if *index <= length {
                assert_eq!(result, Ok(()));
                model.insert(*index, *unit);
            } else {
                assert_eq!(result, Err(out_of_range(*index)));
            }
        }
        Edit::Insert(index, units) => {
            let result = buffer.insert(*index, units);
            if *index <= length {
                assert_eq!(result, Ok(()));
                model.splice(*index..*index, units.iter().copied());
            } else {
                assert_eq!(result, Err(out_of_range(*index)));
            }
        }
        Edit::DelAt(index) => {
            let result = buffer.del_at(*index);
            if *index < length {
                assert_eq!(result, Ok(model.remove(*index)));
            } else {
                assert_eq!(result, Err(out_of_range(*index)));
            }
        }
        Edit::Del(begin, count) => {
            let result = buffer.del(*begin, *count);
            let start = (*begin).min(length);
            let removable = (length - start).min(*count);
            model.drain(start..start + removable);
            if removable == *count {
                assert_eq!(result, Ok(()));
            } else {
                assert_eq!(
                    result,
                    Err(GapBufferError::OutOfRange {
                        index: *begin,
                        length: model.len()
                    })
                );
            }
        }
        Edit::SetCursor(index) => {
            assert_eq!(buffer.set_cursor(*index).is_ok(), *index <= length);
        }
        Edit::Clear => {
            buffer.clear();
            model.clear();
        }
    }
}

proptest! {
    #[test]
    fn matches_vector_model(edits in prop::collection::vec(edit_strategy(), 0..64)) {
        let mut buffer = GapBuffer::new();
        let mut model = Vec::new();

        for edit in &edits {
            apply(&mut buffer, &mut model, edit);

            let gap = buffer.gap();
            prop_assert!(gap.start <= gap.end);
            prop_assert!(gap.end <= buffer.capacity());
            prop_assert_eq!(buffer.len(), model.len());
            prop_assert_eq!(buffer.to_vec(), model.clone());
        }
    }

    #[test]
    fn typing_forward_matches_batched_insert(
        initial in prop::collection::vec(any::<u8>(), 0..32),
        typed in prop::collection::vec(any::<u8>(), 0..32),
        start in 0..32usize,
    ) {
        let start = start.min(initial.len());

        let mut one_at_a_time = GapBuffer::from(initial.clone());
        for (offset, unit) in typed.iter().enumerate() {
            one_at_a_time.insert_at(start + offset, *unit).unwrap();
        }

        let mut batched = GapBuffer::from(initial);
        batched.insert(start, &typed).unwrap();

        prop_assert_eq!(one_at_a_time.to_vec(), batched.to_vec());
    }

    #[test]
    fn insert_then_delete_is_identity(
        initial in prop::collection::vec(any::<u8>(), 0..32),
        index in 0..33usize,
        cursor in 0..33usize,
        unit in any::<u8>(),
    ) {
        let mut buffer = GapBuffer::from(initial.clone());
        buffer.set_cursor(cursor.min(initial.len())).unwrap();
        let index = index.min(initial.len());

        buffer.insert_at(index, unit).unwrap();
        prop_assert_eq!(buffer.del_at(index), Ok(unit));
        prop_assert_eq!(buffer.to_vec(), initial);
    }

    #[test]
    fn at_matches_materialized_content(
        initial in prop::collection::vec(any::<u8>(), 1..32),
        cursor in 0..33usize,
    ) {
        let mut buffer = GapBuffer::from(initial.clone());
        buffer.set_cursor(cursor.min(initial.len())).unwrap();

        for (index, unit) in initial.iter().enumerate() {
            prop_assert_eq!(buffer.at(index), Ok(*unit));
        }
        prop_assert!(buffer.at(initial.len()).is_err());
    }

    #[test]
    fn clear_always_empties(edits in prop::collection::vec(edit_strategy(), 0..32)) {
        let mut buffer = GapBuffer::new();
        let mut model = Vec::new();
        for edit in &edits {
            apply(&mut buffer, &mut model, edit);
        }

        buffer.clear();
        prop_assert_eq!(buffer.len(), 0);
        prop_assert_eq!(buffer.to_string(), "");
    }
}

#[test]
fn concrete_scenarios() {
    let mut buffer = GapBuffer::new();
    buffer.insert(0, b"foo").unwrap();
    buffer.insert(0, b"bar").unwrap();
    assert_eq!(buffer.to_string(), "barfoo");

    let mut buffer = GapBuffer::new();
    buffer.insert(0, b"Hello ").unwrap();
    buffer.insert(6, b"World!").unwrap();
    buffer.del(4, 1).unwrap();
    assert_eq!(buffer.to_string(), "Hell World!");

    let mut buffer = GapBuffer::new();
    buffer.insert(0, b"abcdefgh").unwrap();
    for _ in 0..3 {
        buffer.del_at(0).unwrap();
    }
    assert_eq!(buffer.to_string(), "defgh");

    let mut buffer = GapBuffer::new();
    buffer.insert(0, b"abcdefgh").unwrap();
    buffer.del(3, 5).unwrap();
    assert_eq!(buffer.to_string(), "abc");

    let mut buffer = GapBuffer::new();
    buffer.insert(0, b"Hello").unwrap();
    buffer.insert(2, b" World!").unwrap();
    assert_eq!(buffer.to_string(), "He World!llo");
}
