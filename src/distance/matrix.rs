//! Dense directed travel-time matrix.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{Result, RoutingError};
use crate::models::{Location, LocationFilter, Trip};

/// A directed, weighted adjacency matrix over locations, stored row-major.
///
/// Built once from a set of trips. Every distinct address appearing as a
/// trip endpoint becomes a vertex; indices follow first appearance
/// (origin before destination, trips in input order) and never change.
///
/// An ordered pair with no trip reads as travel time 0, which makes it
/// indistinguishable from a free edge. Callers must supply a trip for every
/// ordered pair used in routing, or build with [`TravelMatrix::strict`].
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Location, Trip};
/// use delivery_routing::distance::TravelMatrix;
///
/// let a = Location::plain("", "A");
/// let b = Location::plain("", "B");
/// let matrix = TravelMatrix::new(vec![
///     Trip::new(a.clone(), b.clone(), 5).unwrap(),
///     Trip::new(b, a, 7).unwrap(),
/// ]);
/// assert_eq!(matrix.location_count(), 2);
/// assert_eq!(matrix.travel_time(0, 1), 5);
/// assert_eq!(matrix.travel_time(1, 0), 7);
/// ```
#[derive(Debug, Clone)]
pub struct TravelMatrix {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
    data: Vec<u64>,
    present: Vec<bool>,
}

impl TravelMatrix {
    /// Builds a matrix from trips. When several trips cover the same ordered
    /// pair, the last one wins.
    pub fn new(trips: impl IntoIterator<Item = Trip>) -> Self {
        let trips: Vec<Trip> = trips.into_iter().collect();

        let mut locations = Vec::new();
        let mut index = HashMap::new();
        for trip in &trips {
            for loc in [trip.origin(), trip.destination()] {
                if !index.contains_key(loc.address()) {
                    index.insert(loc.address().to_string(), locations.len());
                    locations.push(loc.clone());
                }
            }
        }

        let n = locations.len();
        let mut matrix = Self {
            locations,
            index,
            data: vec![0; n * n],
            present: vec![false; n * n],
        };

        for trip in &trips {
            let from = matrix.index[trip.origin().address()];
            let to = matrix.index[trip.destination().address()];
            matrix.data[from * n + to] = trip.travel_time();
            matrix.present[from * n + to] = true;
        }

        let missing = matrix.missing_edges().len();
        if missing > 0 {
            warn!(
                missing,
                locations = n,
                "travel matrix has ordered pairs without a trip; they read as zero travel time"
            );
        }

        matrix
    }

    /// Builds a matrix, failing if any off-diagonal ordered pair lacks a trip.
    pub fn strict(trips: impl IntoIterator<Item = Trip>) -> Result<Self> {
        let matrix = Self::new(trips);
        let count = matrix.missing_edges().len();
        if count > 0 {
            return Err(RoutingError::MissingEdges { count });
        }
        Ok(matrix)
    }

    /// Returns the location at `index`.
    pub fn location(&self, index: usize) -> Result<&Location> {
        self.locations
            .get(index)
            .ok_or(RoutingError::LocationOutOfRange {
                index,
                count: self.locations.len(),
            })
    }

    /// All locations in index order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Index of the location sharing `location`'s address, if any.
    pub fn index_of(&self, location: &Location) -> Option<usize> {
        self.index.get(location.address()).copied()
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of locations of the given variant.
    pub fn location_count_of(&self, filter: LocationFilter) -> usize {
        self.locations
            .iter()
            .filter(|loc| filter.matches(loc.kind()))
            .count()
    }

    /// Travel time from `from` to `to`; 0 when no trip was supplied.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn travel_time(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size() + to]
    }

    /// Returns `true` if a trip was supplied for the ordered pair.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.present[from * self.size() + to]
    }

    /// Off-diagonal ordered pairs without a trip, in row-major order.
    pub fn missing_edges(&self) -> Vec<(usize, usize)> {
        let n = self.size();
        let mut missing = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if i != j && !self.present[i * n + j] {
                    missing.push((i, j));
                }
            }
        }
        missing
    }

    /// Sum of consecutive edge weights along `sequence`.
    pub fn total_travel_time(&self, sequence: &[usize]) -> u64 {
        sequence
            .windows(2)
            .map(|w| self.travel_time(w[0], w[1]))
            .sum()
    }

    /// Sum of package demand over the delivery locations in `sequence`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn total_packages(&self, sequence: &[usize]) -> u64 {
        sequence
            .iter()
            .filter_map(|&i| self.locations[i].packages())
            .map(u64::from)
            .sum()
    }

    /// Returns `true` if `location` is a delivery location with
    /// `min_packages <= packages <= max_packages`.
    pub fn is_deliverable(
        &self,
        location: usize,
        min_packages: u32,
        max_packages: u32,
    ) -> Result<bool> {
        check_range(min_packages, max_packages)?;
        Ok(self
            .location(location)?
            .packages()
            .is_some_and(|p| p >= min_packages && p <= max_packages))
    }

    /// Delivery locations within the package range, in ascending index order.
    pub fn delivery_locations(&self, min_packages: u32, max_packages: u32) -> Result<Vec<usize>> {
        check_range(min_packages, max_packages)?;
        Ok((0..self.size())
            .filter(|&i| {
                self.locations[i]
                    .packages()
                    .is_some_and(|p| p >= min_packages && p <= max_packages)
            })
            .collect())
    }

    /// Returns `true` if `location` is a distribution center with
    /// `min_inventory <= inventory <= max_inventory`.
    pub fn has_inventory(
        &self,
        location: usize,
        min_inventory: u32,
        max_inventory: u32,
    ) -> Result<bool> {
        check_range(min_inventory, max_inventory)?;
        Ok(self
            .location(location)?
            .inventory()
            .is_some_and(|v| v >= min_inventory && v <= max_inventory))
    }

    /// Distribution centers within the inventory range, in ascending index order.
    pub fn distribution_centers(
        &self,
        min_inventory: u32,
        max_inventory: u32,
    ) -> Result<Vec<usize>> {
        check_range(min_inventory, max_inventory)?;
        Ok((0..self.size())
            .filter(|&i| {
                self.locations[i]
                    .inventory()
                    .is_some_and(|v| v >= min_inventory && v <= max_inventory)
            })
            .collect())
    }

    /// Returns the candidate closest to `origin` and its travel time.
    ///
    /// `origin` itself is skipped. Ties go to the earliest candidate in
    /// `candidates`. Returns `None` if no candidate is eligible.
    pub fn nearest_neighbor(&self, origin: usize, candidates: &[usize]) -> Option<(usize, u64)> {
        let mut nearest: Option<(usize, u64)> = None;
        for &dst in candidates {
            if dst == origin {
                continue;
            }
            let t = self.travel_time(origin, dst);
            if nearest.map_or(true, |(_, best)| t < best) {
                nearest = Some((dst, t));
            }
        }
        nearest
    }

    /// Returns the candidate with the largest mean inbound travel time from
    /// the other candidates.
    ///
    /// A lone candidate has mean 0 and is returned. Ties go to the earliest
    /// candidate. Returns `None` if `candidates` is empty.
    pub fn farthest_outlier(&self, candidates: &[usize]) -> Option<usize> {
        let mut outlier: Option<(usize, f64)> = None;
        for &y in candidates {
            let inbound: Vec<u64> = candidates
                .iter()
                .filter(|&&x| x != y)
                .map(|&x| self.travel_time(x, y))
                .collect();
            let mean = if inbound.is_empty() {
                0.0
            } else {
                inbound.iter().sum::<u64>() as f64 / inbound.len() as f64
            };
            if outlier.map_or(true, |(_, best)| mean > best) {
                outlier = Some((y, mean));
            }
        }
        outlier.map(|(y, _)| y)
    }

    fn size(&self) -> usize {
        self.locations.len()
    }
}

fn check_range(min: u32, max: u32) -> Result<()> {
    if min > max {
        return Err(RoutingError::InvalidRange { min, max });
    }
    Ok(())
}
