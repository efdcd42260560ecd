//! Route planning over a travel matrix.
//!
//! - [`RoutePlanner`]: candidate tour generation and ranking
//! - [`RoutePlans`]: lazy greedy assignment for one vehicle class
//! - [`RoutePlanner::plan_fleet`]: assignment across several vehicle classes
//! - [`PlannerConfig`]: planning parameters

mod assignment;
mod config;
mod fleet;

use std::collections::BTreeSet;

use tracing::trace;

pub use assignment::RoutePlans;
pub use config::PlannerConfig;

use crate::constructive::SpanningTree;
use crate::distance::TravelMatrix;
use crate::error::{Result, RoutingError};
use crate::local_search::{optimize_exact, optimize_heuristic, EXACT_SEARCH_LIMIT};
use crate::models::{RoutePlan, Trip};

/// Plans delivery routes from a depot over a [`TravelMatrix`].
///
/// Holds no state beyond the matrix; every planning call owns its own
/// working sets.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Location, Trip};
/// use delivery_routing::planner::{PlannerConfig, RoutePlanner};
///
/// let locs = [
///     Location::distribution_center("Depot", "D", 0),
///     Location::delivery("", "A", 40),
///     Location::delivery("", "B", 40),
///     Location::delivery("", "C", 40),
/// ];
/// let mut trips = Vec::new();
/// for a in &locs {
///     for b in &locs {
///         if a != b {
///             trips.push(Trip::new(a.clone(), b.clone(), 60).unwrap());
///         }
///     }
/// }
/// let planner = RoutePlanner::from_trips(trips);
/// let depot = planner.matrix().distribution_centers(0, u32::MAX).unwrap()[0];
///
/// let config = PlannerConfig::default().with_max_payload(80);
/// let routes: Vec<_> = planner.plan(depot, &config).unwrap().collect();
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes.iter().map(|r| r.total_packages).sum::<u64>(), 120);
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    matrix: TravelMatrix,
}

impl RoutePlanner {
    /// Creates a planner over an existing matrix.
    pub fn new(matrix: TravelMatrix) -> Self {
        Self { matrix }
    }

    /// Builds the matrix from trips and wraps it.
    pub fn from_trips(trips: impl IntoIterator<Item = Trip>) -> Self {
        Self::new(TravelMatrix::new(trips))
    }

    /// The underlying travel matrix.
    pub fn matrix(&self) -> &TravelMatrix {
        &self.matrix
    }

    /// See [`optimize_exact`].
    pub fn optimize_exact(&self, tour: &[usize], depot: usize) -> Vec<usize> {
        optimize_exact(&self.matrix, tour, depot)
    }

    /// See [`optimize_heuristic`].
    pub fn optimize_heuristic(&self, tour: &[usize], depot: usize) -> Vec<usize> {
        optimize_heuristic(&self.matrix, tour, depot)
    }

    /// Closes `tour` at `depot` and improves it: exhaustively below
    /// [`EXACT_SEARCH_LIMIT`] stops, otherwise with one triangle-swap pass.
    pub fn improve_tour(&self, tour: &[usize], depot: usize) -> Vec<usize> {
        if tour.len() < EXACT_SEARCH_LIMIT {
            self.optimize_exact(tour, depot)
        } else {
            self.optimize_heuristic(tour, depot)
        }
    }

    /// Travel time per package. A tour carrying no packages ranks last.
    pub fn cost_per_package(&self, tour: &[usize]) -> f64 {
        let packages = self.matrix.total_packages(tour);
        if packages == 0 {
            return f64::INFINITY;
        }
        self.matrix.total_travel_time(tour) as f64 / packages as f64
    }

    /// Builds one closed candidate tour per stop in `stops`, each grown from
    /// that stop under `max_payload`, ranked ascending by cost per package.
    ///
    /// Fails if `depot` is not a distribution center or a stop index is out
    /// of range.
    pub fn routes_starting_at_each(
        &self,
        depot: usize,
        stops: &BTreeSet<usize>,
        max_payload: u32,
    ) -> Result<Vec<Vec<usize>>> {
        self.check_depot(depot)?;
        if let Some(&index) = stops.iter().find(|&&s| s >= self.matrix.location_count()) {
            return Err(RoutingError::LocationOutOfRange {
                index,
                count: self.matrix.location_count(),
            });
        }
        Ok(self.candidate_tours(depot, stops, max_payload))
    }

    /// Lazily plans routes for one vehicle class until every delivery
    /// location with `min_packages <= packages <= max_packages` is covered.
    ///
    /// Fails up front on an invalid range or a depot that is not a
    /// distribution center.
    pub fn plan_single_vehicle_class(
        &self,
        depot: usize,
        min_packages: u32,
        max_packages: u32,
        max_payload: u32,
        avg_unload_time: u64,
    ) -> Result<RoutePlans<'_>> {
        self.check_depot(depot)?;
        let undelivered = self
            .matrix
            .delivery_locations(min_packages, max_packages)?
            .into_iter()
            .collect();
        Ok(RoutePlans::new(
            self,
            depot,
            undelivered,
            max_payload,
            avg_unload_time,
        ))
    }

    /// [`plan_single_vehicle_class`](Self::plan_single_vehicle_class) driven by a config.
    pub fn plan(&self, depot: usize, config: &PlannerConfig) -> Result<RoutePlans<'_>> {
        self.plan_single_vehicle_class(
            depot,
            config.min_packages(),
            config.max_packages(),
            config.max_payload(),
            config.avg_unload_time(),
        )
    }

    pub(crate) fn check_depot(&self, depot: usize) -> Result<()> {
        if !self.matrix.location(depot)?.is_distribution_center() {
            return Err(RoutingError::NotADistributionCenter { index: depot });
        }
        Ok(())
    }

    pub(crate) fn candidate_tours(
        &self,
        depot: usize,
        stops: &BTreeSet<usize>,
        max_payload: u32,
    ) -> Vec<Vec<usize>> {
        let mut ranked: Vec<(f64, Vec<usize>)> = stops
            .iter()
            .map(|&start| {
                let tree = SpanningTree::build(&self.matrix, start, stops, max_payload);
                let tour = self.improve_tour(&tree.tour(), depot);
                let cost = self.cost_per_package(&tour);
                trace!(start, ?tour, cost, "candidate tour");
                (cost, tour)
            })
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        ranked.into_iter().map(|(_, tour)| tour).collect()
    }

    pub(crate) fn route_plan(&self, tour: &[usize], avg_unload_time: u64) -> RoutePlan {
        let total_packages = self.matrix.total_packages(tour);
        RoutePlan {
            travel_time: self.matrix.total_travel_time(tour),
            total_packages,
            delivery_time: total_packages.saturating_mul(avg_unload_time),
            stops: tour
                .iter()
                .map(|&i| self.matrix.locations()[i].clone())
                .collect(),
        }
    }
}
