//! Fuzz target for clamped editing.
//!
//! Clamped mode must accept any address on any array without failing.

#![no_main]

use arbitrary::Arbitrary;
use chararray::{BoundsMode, CharArray};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Join { from: isize, to: isize },
    Count { index: isize, count: isize, target: char },
    FindAny { from: isize, to: isize, targets: Vec<char> },
    Delete { index: isize, count: isize },
    Insert { index: isize, ch: char },
    Replace { from: isize, to: isize, ch: char },
    Remove { index: isize, count: isize, target: char },
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mode = BoundsMode::Clamped;
    let mut array = CharArray::from(input.text.as_str());

    for op in input.ops {
        let ok = match op {
            Op::Join { from, to } => array.join_range(from, to, mode).is_ok(),
            Op::Count {
                index,
                count,
                target,
            } => array.count(index, count, target, mode).is_ok(),
            Op::FindAny { from, to, targets } => {
                array.find_any_range(from, to, &targets, mode).is_ok()
            }
            Op::Delete { index, count } => array.delete(index, count, mode).is_ok(),
            Op::Insert { index, ch } => array.insert(index, ch, mode).is_ok(),
            Op::Replace { from, to, ch } => array.replace_range(from, to, ch, mode).is_ok(),
            Op::Remove {
                index,
                count,
                target,
            } => array.remove(index, count, target, mode).is_ok(),
        };
        assert!(ok, "clamped operation failed");
    }
});
