//! Exhaustive permutation search for short tours.
//!
//! # Algorithm
//!
//! Closes the tour at the depot and evaluates every ordering of the
//! interior stops, keeping the cheapest. Orderings are enumerated in
//! lexicographic order of stop positions starting from the given order, and
//! a later ordering replaces the incumbent only if strictly cheaper.
//!
//! # Complexity
//!
//! O(n! · n). Only used below [`EXACT_SEARCH_LIMIT`] stops.

use itertools::Itertools;

use crate::distance::TravelMatrix;

/// Tours with fewer stops than this are optimized exhaustively.
pub const EXACT_SEARCH_LIMIT: usize = 9;

/// Returns the cheapest closed tour `depot → permutation(tour) → depot`.
///
/// # Arguments
///
/// * `matrix`: Travel-time matrix
/// * `tour`: Interior stops (excluding depot)
/// * `depot`: Depot location index
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Location, Trip};
/// use delivery_routing::distance::TravelMatrix;
/// use delivery_routing::local_search::optimize_exact;
///
/// let locs = [
///     Location::distribution_center("", "D", 0),
///     Location::delivery("", "A", 1),
///     Location::delivery("", "B", 1),
/// ];
/// let times = [[0, 1, 5], [5, 0, 1], [1, 5, 0]];
/// let mut trips = Vec::new();
/// for i in 0..3 {
///     for j in 0..3 {
///         if i != j {
///             trips.push(Trip::new(locs[i].clone(), locs[j].clone(), times[i][j]).unwrap());
///         }
///     }
/// }
/// let matrix = TravelMatrix::new(trips);
///
/// assert_eq!(optimize_exact(&matrix, &[2, 1], 0), vec![0, 1, 2, 0]);
/// ```
pub fn optimize_exact(matrix: &TravelMatrix, tour: &[usize], depot: usize) -> Vec<usize> {
    let mut best = close(tour, depot);
    let mut best_time = matrix.total_travel_time(&best);

    for perm in tour.iter().copied().permutations(tour.len()) {
        let candidate = close(&perm, depot);
        let t = matrix.total_travel_time(&candidate);
        if t < best_time {
            best = candidate;
            best_time = t;
        }
    }

    best
}

/// Wraps `stops` with `depot` at both ends.
pub(crate) fn close(stops: &[usize], depot: usize) -> Vec<usize> {
    let mut closed = Vec::with_capacity(stops.len() + 2);
    closed.push(depot);
    closed.extend_from_slice(stops);
    closed.push(depot);
    closed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Trip};
    use proptest::prelude::*;

    fn matrix_from(times: &[Vec<u64>]) -> TravelMatrix {
        let n = times.len();
        let locs: Vec<Location> = (0..n)
            .map(|i| {
                if i == 0 {
                    Location::distribution_center("", "depot", 0)
                } else {
                    Location::delivery("", format!("stop {i}"), 1)
                }
            })
            .collect();
        let mut trips = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    trips.push(Trip::new(locs[i].clone(), locs[j].clone(), times[i][j]).expect("valid"));
                }
            }
        }
        TravelMatrix::new(trips)
    }

    /// Every ordering of `items`, by simple recursion.
    fn all_orderings(items: &[usize]) -> Vec<Vec<usize>> {
        if items.is_empty() {
            return vec![Vec::new()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in all_orderings(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_close() {
        assert_eq!(close(&[3, 4], 0), vec![0, 3, 4, 0]);
        assert_eq!(close(&[], 7), vec![7, 7]);
    }

    #[test]
    fn test_single_stop() {
        let m = matrix_from(&[vec![0, 3], vec![4, 0]]);
        assert_eq!(optimize_exact(&m, &[1], 0), vec![0, 1, 0]);
    }

    #[test]
    fn test_ties_keep_given_order() {
        let m = matrix_from(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
        assert_eq!(optimize_exact(&m, &[2, 1], 0), vec![0, 2, 1, 0]);
        assert_eq!(optimize_exact(&m, &[1, 2], 0), vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_asymmetric_direction() {
        // cheap ring 0→1→2→3→0, expensive the other way
        let m = matrix_from(&[
            vec![0, 1, 9, 9],
            vec![9, 0, 1, 9],
            vec![9, 9, 0, 1],
            vec![1, 9, 9, 0],
        ]);
        let best = optimize_exact(&m, &[3, 2, 1], 0);
        assert_eq!(best, vec![0, 1, 2, 3, 0]);
        assert_eq!(m.total_travel_time(&best), 4);
    }

    fn asymmetric_instance() -> impl Strategy<Value = (Vec<Vec<u64>>, usize)> {
        (2usize..=6).prop_flat_map(|n| {
            (
                proptest::collection::vec(proptest::collection::vec(1u64..100, n), n),
                1usize..n,
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_exact_is_optimal((times, stops) in asymmetric_instance()) {
            let m = matrix_from(&times);
            let tour: Vec<usize> = (1..=stops).collect();
            let best = optimize_exact(&m, &tour, 0);
            let best_time = m.total_travel_time(&best);

            prop_assert_eq!(best.first(), Some(&0));
            prop_assert_eq!(best.last(), Some(&0));
            let mut interior = best[1..best.len() - 1].to_vec();
            interior.sort_unstable();
            prop_assert_eq!(&interior, &tour);

            for ordering in all_orderings(&tour) {
                prop_assert!(best_time <= m.total_travel_time(&close(&ordering, 0)));
            }
        }
    }
}
