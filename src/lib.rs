//! Classical exact-substring matchers and a sequential timing harness.
//!
//! Three first-match search algorithms over byte slices: Knuth-Morris-Pratt,
//! Boyer-Moore (bad-character heuristic only), and Rabin-Karp. The
//! [`bench`] harness fetches a corpus over HTTP, times each
//! (algorithm, pattern) pair once, and prints a console report. A bounded
//! binary search utility lives in [`bound`].
//!
//! All matchers are pure functions of their inputs and return the leftmost
//! occurrence as `Option<usize>` (a byte offset). A pattern longer than
//! the text is an ordinary miss, not an error.

pub mod bench;
pub mod bound;
pub mod boyer_moore;
pub mod fetch;
pub mod kmp;
pub mod rabin_karp;

pub use bench::{measure, print_report, run_benchmark, Algorithm, Measurement, PatternKind};
pub use bound::{bounded_search, BoundError, Bounded};
pub use boyer_moore::{boyer_moore_search, build_shift_table};
pub use fetch::{build_client, fetch_text, FetchError};
pub use kmp::{build_prefix_table, kmp_search};
pub use rabin_karp::{polynomial_hash, rabin_karp_search};
