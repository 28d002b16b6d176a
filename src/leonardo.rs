//! Leonardo numbers and the index arithmetic of implicit Leonardo heaps.
//!
//! A Leonardo heap of order `k` occupies `L(k)` consecutive slice positions
//! and its root sits at the highest one. If `k >= 2` the right subtree (order
//! `k - 2`) ends immediately before the root and the left subtree (order
//! `k - 1`) ends immediately before the right one. All position math of the
//! sort lives in this module, so the off-by-one reasoning is done exactly
//! once.

/// Number of Leonardo numbers representable in `usize`. The next one in the
/// sequence would overflow, so no heap of a larger order can fit in memory.
#[cfg(target_pointer_width = "64")]
pub(crate) const LEONARDO_COUNT: usize = 92;
#[cfg(target_pointer_width = "32")]
pub(crate) const LEONARDO_COUNT: usize = 46;

/// `L(0) = L(1) = 1` and `L(k) = L(k - 1) + L(k - 2) + 1`.
const LEONARDO: [usize; LEONARDO_COUNT] = leonardo_table();

const fn leonardo_table() -> [usize; LEONARDO_COUNT] {
    let mut table = [1usize; LEONARDO_COUNT];

    let mut k = 2;
    while k < LEONARDO_COUNT {
        table[k] = table[k - 1] + table[k - 2] + 1;
        k += 1;
    }

    table
}

/// Element count of an order-`order` Leonardo heap.
///
/// Panics on orders past [`LEONARDO_COUNT`]; the shape bookkeeping never
/// produces one, because the corresponding heap could not fit in memory.
#[inline]
pub(crate) fn leonardo(order: usize) -> usize {
    LEONARDO[order]
}

/// Position of the right child of the heap rooted at `root`.
#[inline]
pub(crate) fn right_child(root: usize) -> usize {
    debug_assert!(root > 0, "leftmost position has no right child");
    root - 1
}

/// Position of the left child of the heap of order `order` rooted at `root`.
#[inline]
pub(crate) fn left_child(root: usize, order: usize) -> usize {
    right_child(root) - leonardo(right_child_order(order))
}

/// Order of the left subtree of an order-`order` heap.
#[inline]
pub(crate) fn left_child_order(order: usize) -> usize {
    debug_assert!(order >= 2, "heaps of order 0 and 1 are leaves");
    order - 1
}

/// Order of the right subtree of an order-`order` heap.
#[inline]
pub(crate) fn right_child_order(order: usize) -> usize {
    debug_assert!(order >= 2, "heaps of order 0 and 1 are leaves");
    order - 2
}

/// Root position of the heap immediately to the left of the order-`order`
/// heap rooted at `root`. The caller guarantees such a heap exists.
#[inline]
pub(crate) fn left_neighbor(root: usize, order: usize) -> usize {
    debug_assert!(leonardo(order) <= root, "leftmost heap has no left neighbor");
    root - leonardo(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_recurrence() {
        assert_eq!(leonardo(0), 1);
        assert_eq!(leonardo(1), 1);

        for k in 2..LEONARDO_COUNT {
            assert_eq!(leonardo(k), leonardo(k - 1) + leonardo(k - 2) + 1);
        }
    }

    #[test]
    fn table_prefix_values() {
        let expected = [
            1usize, 1, 3, 5, 9, 15, 25, 41, 67, 109, 177, 287, 465, 753, 1219, 1973,
        ];
        for (k, &l_k) in expected.iter().enumerate() {
            assert_eq!(leonardo(k), l_k);
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn table_covers_usize() {
        assert_eq!(leonardo(LEONARDO_COUNT - 1), 15080227609492692857);

        // The next Leonardo number no longer fits in usize.
        let next = leonardo(LEONARDO_COUNT - 1)
            .checked_add(leonardo(LEONARDO_COUNT - 2))
            .and_then(|sum| sum.checked_add(1));
        assert_eq!(next, None);
    }

    #[test]
    #[should_panic]
    fn order_out_of_range_panics() {
        leonardo(LEONARDO_COUNT);
    }

    #[test]
    fn child_positions() {
        // Order-2 heap over positions 0..=2: children are the two leaves.
        assert_eq!(right_child(2), 1);
        assert_eq!(left_child(2, 2), 0);

        // Order-3 heap over positions 0..=4: left subtree (order 2) roots at
        // 2, right subtree (order 1) is the leaf at 3.
        assert_eq!(right_child(4), 3);
        assert_eq!(left_child(4, 3), 2);
        assert_eq!(left_child_order(3), 2);
        assert_eq!(right_child_order(3), 1);
    }

    #[test]
    fn neighbor_positions() {
        // Forest [3, 1] over 6 elements: roots at 4 and 5.
        assert_eq!(left_neighbor(5, 1), 4);
        // Forest [4, 2] over 12 elements: roots at 8 and 11.
        assert_eq!(left_neighbor(11, 2), 8);
    }
}
