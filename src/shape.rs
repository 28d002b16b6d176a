//! The forest shape stack: which Leonardo heaps currently tile the slice.
//!
//! The stack holds heap orders, read left to right as the orders of the
//! disjoint heaps covering a prefix of the slice, with the last entry's heap
//! ending at the current right boundary. After every push the orders are
//! strictly decreasing and `sum(L(order))` equals the number of elements
//! covered, so the stack plus the slice length fully determine every root
//! position.

use crate::leonardo::{left_child_order, right_child_order, LEONARDO_COUNT};

pub(crate) struct ForestShape {
    orders: Vec<u8>,
}

impl ForestShape {
    /// An empty shape with enough capacity for every push while sorting
    /// `len` elements, so the stack never reallocates mid-sort.
    pub(crate) fn for_len(len: usize) -> Self {
        // The canonical shape for n elements has at most ~1.44 * log2(n)
        // heaps; the drain phase adds at most one more.
        let max_heaps = 3 * ((len | 1).ilog2() as usize) / 2 + 2;

        ForestShape {
            orders: Vec::with_capacity(max_heaps.min(LEONARDO_COUNT + 1)),
        }
    }

    /// Accounts for one new trailing element, applying the Leonardo carry:
    /// two rightmost heaps of adjacent orders `k + 1, k` merge into one heap
    /// of order `k + 2` rooted at the new element; otherwise the element
    /// becomes a new leaf heap of order 1, or 0 if an order-1 heap is already
    /// rightmost.
    pub(crate) fn push(&mut self) {
        match self.orders.as_slice() {
            [.., below, top] if below - top == 1 => {
                self.orders.pop();
                let top = self.orders.len() - 1;
                self.orders[top] += 1;
            }
            [.., 1] => self.orders.push(0),
            _ => self.orders.push(1),
        }
    }

    /// Removes the rightmost heap and returns its order.
    pub(crate) fn pop(&mut self) -> usize {
        let order = self
            .orders
            .pop()
            .expect("one shape entry per remaining heap");
        usize::from(order)
    }

    /// Reinstates the two subtrees of a just-popped order-`order` heap as
    /// independent heaps (left then right, matching their slice positions).
    pub(crate) fn expose_children(&mut self, order: usize) {
        self.orders.push(left_child_order(order) as u8);
        self.orders.push(right_child_order(order) as u8);
    }

    /// Order of the heap at stack position `index`.
    #[inline]
    pub(crate) fn order(&self, index: usize) -> usize {
        usize::from(self.orders[index])
    }

    /// Stack position of the rightmost heap.
    #[inline]
    pub(crate) fn top_index(&self) -> usize {
        debug_assert!(!self.orders.is_empty());
        self.orders.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn orders(&self) -> &[u8] {
        &self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leonardo::leonardo;

    fn shape_after(n: usize) -> ForestShape {
        let mut shape = ForestShape::for_len(n.max(1));
        for _ in 0..n {
            shape.push();
        }
        shape
    }

    #[test]
    fn canonical_small_shapes() {
        let expected: &[(usize, &[u8])] = &[
            (1, &[1]),
            (2, &[1, 0]),
            (3, &[2]),
            (4, &[2, 1]),
            (5, &[3]),
            (6, &[3, 1]),
            (7, &[3, 1, 0]),
            (8, &[3, 2]),
            (9, &[4]),
            (10, &[4, 1]),
        ];

        for &(n, orders) in expected {
            assert_eq!(shape_after(n).orders(), orders, "prefix length {n}");
        }
    }

    #[test]
    fn covers_every_prefix_exactly() {
        let mut shape = ForestShape::for_len(5000);
        for n in 1..=5000usize {
            shape.push();

            let covered: usize = shape
                .orders()
                .iter()
                .map(|&order| leonardo(usize::from(order)))
                .sum();
            assert_eq!(covered, n);
        }
    }

    #[test]
    fn orders_strictly_decrease() {
        for n in 1..=2000usize {
            let shape = shape_after(n);
            for pair in shape.orders().windows(2) {
                assert!(pair[0] > pair[1], "shape {:?} at length {n}", shape.orders());
            }
        }
    }

    #[test]
    fn expose_children_replaces_popped_heap() {
        let mut shape = shape_after(9);
        assert_eq!(shape.orders(), &[4]);

        let order = shape.pop();
        assert_eq!(order, 4);
        shape.expose_children(order);
        assert_eq!(shape.orders(), &[3, 2]);
    }
}
