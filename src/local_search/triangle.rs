//! Single-pass triangle swap for longer tours.
//!
//! # Algorithm
//!
//! Closes the tour at the depot and walks it once from the front. For each
//! consecutive triple `(a, b, c)` the three sides are compared:
//!
//! ```text
//! x = t(a, b)    y = t(b, c)    z = t(a, c)
//! ```
//!
//! If `z` is not the longest side, `b` and `c` trade places. Swaps happen in
//! place, so later triples see earlier swaps. The last triple ends on the
//! final stop; the closing depot never moves.
//!
//! # Complexity
//!
//! O(n), one pass, no convergence loop.

use super::exact::close;
use crate::distance::TravelMatrix;

/// Applies one forward triangle-swap pass to `depot → tour → depot`.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Location, Trip};
/// use delivery_routing::distance::TravelMatrix;
/// use delivery_routing::local_search::optimize_heuristic;
///
/// let locs = [
///     Location::distribution_center("", "D", 0),
///     Location::delivery("", "A", 1),
///     Location::delivery("", "B", 1),
/// ];
/// let mut trips = Vec::new();
/// for a in &locs {
///     for b in &locs {
///         if a != b {
///             trips.push(Trip::new(a.clone(), b.clone(), 1).unwrap());
///         }
///     }
/// }
/// let matrix = TravelMatrix::new(trips);
///
/// // all sides equal: the direct edge is a longest side, nothing moves
/// assert_eq!(optimize_heuristic(&matrix, &[1, 2], 0), vec![0, 1, 2, 0]);
/// ```
pub fn optimize_heuristic(matrix: &TravelMatrix, tour: &[usize], depot: usize) -> Vec<usize> {
    let mut closed = close(tour, depot);
    if closed.len() < 4 {
        return closed;
    }

    for i in 0..=closed.len() - 4 {
        let (a, b, c) = (closed[i], closed[i + 1], closed[i + 2]);
        let x = matrix.travel_time(a, b);
        let y = matrix.travel_time(b, c);
        let z = matrix.travel_time(a, c);
        if z < x.max(y) {
            closed.swap(i + 1, i + 2);
        }
    }

    closed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Trip};

    fn matrix_from(times: &[&[u64]]) -> TravelMatrix {
        let n = times.len();
        let locs: Vec<Location> = (0..n)
            .map(|i| Location::delivery("", format!("L{i}"), 1))
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

    #[test]
    fn test_short_tours_unchanged() {
        let m = matrix_from(&[&[0, 1], &[1, 0]]);
        assert_eq!(optimize_heuristic(&m, &[], 0), vec![0, 0]);
        assert_eq!(optimize_heuristic(&m, &[1], 0), vec![0, 1, 0]);
    }

    #[test]
    fn test_fixed_point_when_direct_edges_longest() {
        // every direct hop over a stop (a→c) is the longest side
        let m = matrix_from(&[
            &[0, 1, 5, 9],
            &[1, 0, 1, 5],
            &[5, 1, 0, 1],
            &[9, 5, 1, 0],
        ]);
        assert_eq!(optimize_heuristic(&m, &[1, 2, 3], 0), vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_swaps_when_shortcut_shorter() {
        // 0→2 is 1, shorter than 0→1 (5): b and c trade places
        let m = matrix_from(&[
            &[0, 5, 1, 9],
            &[5, 0, 2, 9],
            &[1, 2, 0, 9],
            &[9, 9, 9, 0],
        ]);
        // triple (0,1,2): x=5, y=2, z=1 → swap → [0,2,1,0]
        assert_eq!(optimize_heuristic(&m, &[1, 2], 0), vec![0, 2, 1, 0]);
    }

    #[test]
    fn test_single_pass_sees_earlier_swaps() {
        let m = matrix_from(&[
            &[0, 5, 1, 1],
            &[5, 0, 2, 2],
            &[1, 2, 0, 3],
            &[1, 2, 3, 0],
        ]);
        // i=0: (0,1,2): x=5 y=2 z=1 → swap → [0,2,1,3,0]
        // i=1: (2,1,3): x=2 y=2 z=3 → z longest, keep
        assert_eq!(optimize_heuristic(&m, &[1, 2, 3], 0), vec![0, 2, 1, 3, 0]);
    }

    #[test]
    fn test_ties_with_longest_side_keep_order() {
        // z equals max(x, y): not strictly shorter, no swap
        let m = matrix_from(&[&[0, 4, 4], &[4, 0, 2], &[4, 2, 0]]);
        assert_eq!(optimize_heuristic(&m, &[1, 2], 0), vec![0, 1, 2, 0]);
    }
}
