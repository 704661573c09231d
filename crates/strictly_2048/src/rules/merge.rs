//! Single-line slide and merge.

use crate::types::{Line, SIZE};
use tracing::instrument;

/// Slides a line toward index 0, merging equal neighbors.
///
/// Each tile merges at most once per move and pairs are taken left to
/// right without overlap: `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]` and
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
#[instrument(level = "trace")]
pub fn merge_line(line: Line) -> Line {
    let mut merged = [0; SIZE];
    let mut tiles = line.iter().copied().filter(|&v| v != 0).peekable();
    let mut out = 0;

    while let Some(tile) = tiles.next() {
        // Consuming the partner here keeps the doubled tile out of the next comparison.
        merged[out] = match tiles.next_if_eq(&tile) {
            Some(_) => tile * 2,
            None => tile,
        };
        out += 1;
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_without_merging() {
        assert_eq!(merge_line([0, 2, 0, 4]), [2, 4, 0, 0]);
        assert_eq!(merge_line([2, 4, 8, 16]), [2, 4, 8, 16]);
    }

    #[test]
    fn test_merges_pair_across_gap() {
        assert_eq!(merge_line([2, 0, 0, 2]), [4, 0, 0, 0]);
    }

    #[test]
    fn test_three_equal_merges_first_pair_only() {
        assert_eq!(merge_line([2, 2, 2, 0]), [4, 2, 0, 0]);
        assert_eq!(merge_line([0, 2, 2, 2]), [4, 2, 0, 0]);
    }

    #[test]
    fn test_four_equal_merges_two_pairs() {
        assert_eq!(merge_line([2, 2, 2, 2]), [4, 4, 0, 0]);
    }

    #[test]
    fn test_no_chained_merge() {
        assert_eq!(merge_line([4, 2, 2, 0]), [4, 4, 0, 0]);
        assert_eq!(merge_line([2, 2, 4, 0]), [4, 4, 0, 0]);
        assert_eq!(merge_line([4, 4, 8, 8]), [8, 16, 0, 0]);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(merge_line([0; SIZE]), [0; SIZE]);
    }

    #[test]
    fn test_never_adds_tiles_and_keeps_sum() {
        let lines = [
            [2, 2, 4, 4],
            [0, 8, 8, 8],
            [16, 0, 16, 2],
            [2, 4, 2, 4],
            [1024, 1024, 0, 0],
        ];
        for line in lines {
            let merged = merge_line(line);
            let count = |l: &Line| l.iter().filter(|v| **v != 0).count();
            assert!(count(&merged) <= count(&line), "{:?} -> {:?}", line, merged);
            assert_eq!(merged.iter().sum::<u32>(), line.iter().sum::<u32>());
        }
    }
}
