//! In-place Hoare partition quicksort over `i32` slices, a sortedness check, and the thin
//! shell around them (input patterns, text list codec, command line).

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(v: &mut [i32]) {
                sort(v);
            }

            #[inline]
            fn sort_by<F>(v: &mut [i32], compare: F)
            where
                F: FnMut(&i32, &i32) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

/// A named sort implementation, so tests and benchmarks can run the same suite over different
/// sorts.
pub trait Sort {
    fn name() -> String;

    fn sort(v: &mut [i32]);

    fn sort_by<F>(v: &mut [i32], compare: F)
    where
        F: FnMut(&i32, &i32) -> std::cmp::Ordering;
}

pub mod cli;
pub mod error;
pub mod patterns;
pub mod quicksort;
pub mod text_list;
pub mod validation;

pub use error::{Error, Result};
