//! Tour improvement operators.
//!
//! - [`optimize_exact`]: Exhaustive permutation search, O(n!·n), for tours below [`EXACT_SEARCH_LIMIT`]
//! - [`optimize_heuristic`]: Single forward triangle-swap pass, O(n)

mod exact;
mod triangle;

pub use exact::{optimize_exact, EXACT_SEARCH_LIMIT};
pub use triangle::optimize_heuristic;
