//! Building, re-stabilizing and draining the implicit Leonardo heap forest.
//!
//! Two restructuring procedures keep the forest invariants intact as
//! elements enter and leave one at a time:
//!
//! - `trinkle` restores ascending order among the forest roots after a new
//!   root is exposed, so the rightmost root is always the maximum.
//! - `sift` restores the max-heap property from a given root downward.
//!
//! Both are written as loops; the recursion depth is bounded by the number
//! of heaps resp. the heap order, both *O*(log(*n*)).

use crate::leonardo::{left_child, left_child_order, left_neighbor, right_child, right_child_order};
use crate::shape::ForestShape;

/// Build phase: grows the forest over `v` one element at a time, leaving
/// `shape` describing a complete partition of `v` with the max-heap property
/// holding in every heap and the roots ascending left to right.
pub(crate) fn heapify<T, F>(v: &mut [T], shape: &mut ForestShape, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for node in 0..v.len() {
        shape.push();

        let (root, index) = trinkle(v, shape, node, shape.top_index(), is_less);
        sift(v, root, shape.order(index), is_less);
    }
}

/// Drain phase: repeatedly finalizes the rightmost root, which by the root
/// ordering invariant is the maximum of all elements still in the forest.
///
/// Popping a leaf heap finalizes its element outright. Popping a larger heap
/// leaves its two subtrees behind as independent heaps, each of which must be
/// re-stabilized: first reordered among the roots, then heap-repaired.
pub(crate) fn drain<T, F>(v: &mut [T], shape: &mut ForestShape, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for node in (1..v.len()).rev() {
        let order = shape.pop();
        if order <= 1 {
            continue;
        }

        shape.expose_children(order);

        let left = left_child(node, order);
        let (root, index) = trinkle(v, shape, left, shape.top_index() - 1, is_less);
        sift(v, root, shape.order(index), is_less);

        let right = right_child(node);
        let (root, index) = trinkle(v, shape, right, shape.top_index(), is_less);
        sift(v, root, shape.order(index), is_less);
    }
}

/// Walks the root at `root` (stack position `index`) leftward until the
/// forest roots ascend again, swapping it with each larger left-neighbor
/// root on the way. Returns the position and stack index where the walk
/// stopped; that heap is the one the caller must now `sift`.
///
/// When the current root has children, the walk also stops as soon as the
/// left neighbor does not exceed both of them: the element swapped in would
/// sink below a child anyway, so the pending sift on this heap absorbs the
/// disorder and the root swap would be redundant.
fn trinkle<T, F>(
    v: &mut [T],
    shape: &ForestShape,
    mut root: usize,
    mut index: usize,
    is_less: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    while index > 0 {
        let order = shape.order(index);
        let neighbor = left_neighbor(root, order);

        // Roots already ascend here, nothing left to restore.
        if !is_less(&v[root], &v[neighbor]) {
            break;
        }

        if order > 1 {
            let right = right_child(root);
            let left = left_child(root, order);

            if !is_less(&v[left], &v[neighbor]) || !is_less(&v[right], &v[neighbor]) {
                break;
            }
        }

        v.swap(neighbor, root);
        root = neighbor;
        index -= 1;
    }

    (root, index)
}

/// Sift-down over the asymmetric Leonardo child structure: the left child
/// heads an order `order - 1` subtree, the right child an order `order - 2`
/// one. The root wins ties, so no work happens on runs of equal elements.
fn sift<T, F>(v: &mut [T], mut root: usize, mut order: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while order > 1 {
        let right = right_child(root);
        let left = left_child(root, order);

        let mut largest = root;
        let mut largest_order = order;

        if is_less(&v[largest], &v[left]) {
            largest = left;
            largest_order = left_child_order(order);
        }
        if is_less(&v[largest], &v[right]) {
            largest = right;
            largest_order = right_child_order(order);
        }

        if largest == root {
            break;
        }

        v.swap(root, largest);
        root = largest;
        order = largest_order;
    }
}
