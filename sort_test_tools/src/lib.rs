//! Shared harness for exercising sort implementations.
//!
//! A sort under test implements [`Sort`] and instantiates the whole suite
//! with `instantiate_sort_tests!(SortImpl)` from its `tests/main.rs`. Every
//! test checks the observable contract only: output sorted, output a
//! permutation of the input.

use std::cmp::Ordering;

pub mod patterns;

#[doc(hidden)]
pub use paste;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

#[macro_export]
macro_rules! instantiate_sort_tests_gen {
    ($sort_impl:ty, [$($test_fn:ident),+ $(,)?]) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<test_ $test_fn>]() {
                    $crate::tests::$test_fn::<$sort_impl>();
                }
            }
        )+
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests_gen!(
            $sort_impl,
            [
                basic,
                fixed,
                sorted_stays_sorted,
                random,
                random_uniform,
                random_zipf,
                ascending,
                descending,
                all_equal,
                saw_mixed,
                strings,
                floats_by_partial_cmp,
                comparator_reversed,
                compound_key,
            ]
        );
    };
}
