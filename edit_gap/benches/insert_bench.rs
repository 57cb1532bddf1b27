// This file is part of EditGap.

// EditGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// EditGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use edit_gap::GapBuffer;

fn bench_insert_at_front(c: &mut Criterion) {
    c.bench_function("insert 10k words at front", |b| {
        b.iter(|| {
            let mut buffer = GapBuffer::<u8>::new();
            for _ in 0..10_000 {
                buffer.insert(0, black_box(b"test")).unwrap();
            }
            buffer
        })
    });
}

fn bench_typing_at_cursor(c: &mut Criterion) {
    c.bench_function("type 40k units at cursor", |b| {
        b.iter(|| {
            let mut buffer = GapBuffer::from("fn main() {}\n".repeat(100).as_str());
            buffer.set_cursor(black_box(600)).unwrap();
            for i in 0..40_000 {
                buffer.push_before_cursor(b'a' + (i % 26) as u8);
            }
            buffer
        })
    });
}

fn bench_alternating_edits(c: &mut Criterion) {
    let content = "lorem ipsum dolor sit amet ".repeat(1_000);

    c.bench_function("alternate edits between two far cursors", |b| {
        b.iter(|| {
            let mut buffer = GapBuffer::from(content.as_str());
            let far = buffer.len() - 10;
            for _ in 0..100 {
                buffer.insert_at(black_box(10), b'x').unwrap();
                buffer.del_at(black_box(far)).unwrap();
            }
            buffer
        })
    });
}

criterion_group!(
    benches,
    bench_insert_at_front,
    bench_typing_at_cursor,
    bench_alternating_edits
);
criterion_main!(benches);
