//! Sequence algorithms over contiguous elements: sorting, selection, partitioning, merging,
//! searching, permutation tests, shuffling and folds.
//!
//! Every algorithm is written once against the [`Elements`] traits and so runs over typed slices
//! as well as over type-erased byte spans ([`ElemSlice`], [`ElemBuf`]) whose element size is only
//! known at runtime. Elements are only ever exchanged, never dropped or duplicated, and no
//! algorithm allocates.
//!
//! ```
//! use seq_algo::{nth_element, search_n, sort};
//!
//! let mut v = [5, 3, 8, 1, 9, 2];
//! sort(&mut v[..]);
//! assert_eq!(v, [1, 2, 3, 5, 8, 9]);
//!
//! let mut v = [5, 3, 8, 1, 9, 2];
//! nth_element(&mut v[..], 2);
//! assert_eq!(v[2], 3);
//!
//! assert_eq!(search_n(&[1, 2, 2, 2, 3][..], 3, &2, i32::cmp), Some(1));
//! ```

mod bsearch;
pub mod elem;
mod error;
mod find;
mod fold;
pub mod patterns;
mod permutation;
pub mod raw;
mod search;
pub mod shuffle;
mod sort;

pub use bsearch::{binary_search, equal_range, lower_bound, partition_point, upper_bound};
pub use elem::{ElemBuf, ElemSlice, Elements, ElementsMut, ElementsWrite};
pub use error::{Error, Result};
pub use find::{
    all_of, any_of, count, count_if, equal, find, find_if, find_if_not, max_element, min_element,
    mismatch, none_of,
};
pub use fold::{accumulate, reduce, transform};
pub use permutation::is_permutation;
pub use search::{adjacent_find, find_end, find_first_of, search, search_n};
pub use shuffle::{shuffle, FnSource, RandomSource, ScriptedSource};
pub use sort::{
    heapsort_by, inplace_merge, inplace_merge_by, insertion_sort_by, is_partitioned, is_sorted,
    is_sorted_by, is_sorted_until_by, merge, merge_by, nth_element, nth_element_by, partition,
    sort, sort_by, unique, unique_by,
};
