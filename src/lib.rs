//! Prefix-sum, two-pointer and sliding-window scans over in-memory arrays
//! and strings, plus a small owned singly-linked list.
//!
//! Every operation is a single-threaded, synchronous computation over data
//! the caller already holds: inputs are slices (or `&str`), outputs are a
//! scalar, a vector, or an in-place-mutated buffer where the contract says
//! so. The only state that outlives a call is a prefix-sum structure,
//! built once and immutable afterwards. Preconditions are enforced, not
//! assumed: a bad range, an empty input where one element is required, or
//! a ragged matrix comes back as an [`Error`] instead of a wrong answer.
//!
//! ## Modules
//!
//! - [`prefix`] – 1-D cumulative sums and the scans derived from them
//! - [`matrix`] – row-wise 2-D prefix sums and diagonal sums
//! - [`two_pointer`] – convergent searches, in-place rewrites, fast/slow walk
//! - [`window`] – variable- and fixed-size sliding-window scans
//! - [`list`] – owned singly-linked list
//! - [`fixture`] – seeded input generation for tests and benches
//!
//! ## Usage
//!
//! ```rust
//! use rangescan::{PrefixSums, longest_unique_substring};
//!
//! let sums = PrefixSums::new(&[-2, 0, 3, -5, 2, -1])?;
//! assert_eq!(sums.sum_range(0, 2)?, 1);
//! assert_eq!(longest_unique_substring("abcabcbb"), 3);
//! # Ok::<(), rangescan::Error>(())
//! ```

pub mod core;
pub mod fixture;
pub mod list;
pub mod matrix;
pub mod prefix;
pub mod two_pointer;
pub mod window;

pub use crate::core::{Error, Result};
pub use crate::list::LinkedList;
pub use crate::matrix::{MatrixPrefixSums, diagonal_sum};
pub use crate::prefix::{PrefixSums, max_row_sum, pivot_index, running_sum};
pub use crate::two_pointer::{
    dedup_in_place, find_duplicate, intersection, merge_in_place, reverse_in_place,
    two_sum_sorted,
};
pub use crate::window::{
    contains_permutation, longest_ones_after_deletion, longest_unique_run,
    longest_unique_substring, longest_with_at_most_k_distinct, longest_within_limit,
    min_subarray_len,
};
