//! Kani proof harnesses for the line merge.
//!
//! Bounded over every line of tiles up to 2048.

use crate::{Line, SIZE, merge_line};

fn any_line() -> Line {
    let mut line = [0; SIZE];
    for cell in line.iter_mut() {
        let exponent: u8 = kani::any();
        kani::assume(exponent <= 11);
        *cell = if exponent == 0 { 0 } else { 1 << exponent };
    }
    line
}

fn tiles(line: &Line) -> usize {
    line.iter().filter(|v| **v != 0).count()
}

/// Proves: merging preserves the sum and never adds tiles.
#[kani::proof]
#[kani::unwind(6)]
fn verify_merge_conserves_tiles() {
    let line = any_line();
    let merged = merge_line(line);

    assert_eq!(merged.iter().sum::<u32>(), line.iter().sum::<u32>());
    assert!(tiles(&merged) <= tiles(&line));
}

/// Proves: merged tiles are packed toward index 0.
#[kani::proof]
#[kani::unwind(6)]
fn verify_merge_packs_left() {
    let merged = merge_line(any_line());

    for i in 1..SIZE {
        assert!(merged[i - 1] != 0 || merged[i] == 0);
    }
}
