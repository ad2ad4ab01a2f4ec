//! Rotating item selection.
//!
//! A seed fixes a base index into a section; the caller-controlled offset
//! steps forward from there, so "next item" never re-randomizes.

use crate::design::StoryRng;
use crate::error::{Error, Result};

/// Mask mixed into the design seed so item choice is independent of design.
const ITEM_SEED_MASK: u32 = 0x9E37_79B9;

/// Upper bound on items in one group.
pub const MAX_GROUP_ITEMS: usize = 12;

/// Index of the item shown for `seed` at `offset` in a collection of `len`.
///
/// The result repeats every `len` offsets. Fails with
/// [`Error::EmptyInput`] when `len` is zero.
pub fn item_index(seed: u32, offset: usize, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(Error::EmptyInput("item collection"));
    }
    let mut rng = StoryRng::new(seed ^ ITEM_SEED_MASK);
    let base = rng.int(0, len as i64 - 1) as usize;
    Ok((base + offset % len) % len)
}

/// Indices of `count` consecutive items starting at [`item_index`], wrapping
/// around the end of the collection.
///
/// `count` is bounded by [`MAX_GROUP_ITEMS`] and by `len`, so no item appears
/// twice in a group.
pub fn group_indices(seed: u32, offset: usize, len: usize, count: usize) -> Result<Vec<usize>> {
    let start = item_index(seed, offset, len)?;
    let count = count.min(MAX_GROUP_ITEMS).min(len);
    Ok((0..count).map(|i| (start + i) % len).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_index_empty() {
        assert!(matches!(item_index(1, 0, 0), Err(Error::EmptyInput(_))));
        assert!(group_indices(1, 0, 0, 3).is_err());
    }

    #[test]
    fn test_item_index_reference() {
        assert_eq!(item_index(0, 0, 10).unwrap(), 3);
        assert_eq!(item_index(0x1234, 0, 10).unwrap(), 2);
        assert_eq!(item_index(0x1234, 1, 10).unwrap(), 3);
    }

    #[test]
    fn test_full_cycle_periodicity() {
        for seed in [0, 7, 0x1234, u32::MAX] {
            for len in 1..12 {
                for offset in 0..30 {
                    assert_eq!(
                        item_index(seed, offset, len).unwrap(),
                        item_index(seed, offset + len, len).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn test_offset_steps_forward() {
        let a = item_index(99, 0, 5).unwrap();
        let b = item_index(99, 1, 5).unwrap();
        assert_eq!(b, (a + 1) % 5);
    }

    #[test]
    fn test_group_wraps() {
        // base for seed 0 over 10 items is 3
        assert_eq!(group_indices(0, 5, 10, 4).unwrap(), vec![8, 9, 0, 1]);
    }

    #[test]
    fn test_group_bounded() {
        assert_eq!(group_indices(0, 0, 3, 10).unwrap().len(), 3);
        assert_eq!(
            group_indices(0, 0, 100, 50).unwrap().len(),
            MAX_GROUP_ITEMS
        );
        assert!(group_indices(0, 0, 4, 0).unwrap().is_empty());
    }
}
