//! Aggregates over accepted routes.

use serde::{Deserialize, Serialize};

use super::RoutePlan;

/// Totals across a set of route plans.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{PlanSummary, RoutePlan};
///
/// let plans = vec![
///     RoutePlan { travel_time: 100, total_packages: 5, delivery_time: 50, stops: vec![] },
///     RoutePlan { travel_time: 200, total_packages: 3, delivery_time: 30, stops: vec![] },
/// ];
/// let summary = PlanSummary::from_routes(&plans);
/// assert_eq!(summary.num_routes, 2);
/// assert_eq!(summary.total_packages, 8);
/// assert_eq!(summary.total_delivery_time, 380);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of routes.
    pub num_routes: usize,
    /// Packages delivered across all routes.
    pub total_packages: u64,
    /// Driving time across all routes.
    pub total_travel_time: u64,
    /// Unloading time across all routes.
    pub total_unload_time: u64,
    /// Driving plus unloading.
    pub total_delivery_time: u64,
}

impl PlanSummary {
    /// Sums the given plans.
    pub fn from_routes<'a>(routes: impl IntoIterator<Item = &'a RoutePlan>) -> Self {
        let mut summary = Self::default();
        for route in routes {
            summary.add(route);
        }
        summary
    }

    /// Adds one route to the totals.
    pub fn add(&mut self, route: &RoutePlan) {
        self.num_routes += 1;
        self.total_packages = self.total_packages.saturating_add(route.total_packages);
        self.total_travel_time = self.total_travel_time.saturating_add(route.travel_time);
        self.total_unload_time = self.total_unload_time.saturating_add(route.delivery_time);
        self.total_delivery_time = self.total_delivery_time.saturating_add(route.total_time());
    }
}

/// A route assigned to a named vehicle class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedRoute {
    /// Name of the vehicle class running this route.
    pub vehicle_class: String,
    /// The route itself.
    pub plan: RoutePlan,
}

/// Result of planning with several vehicle classes.
///
/// `unassigned` holds matrix indices of delivery locations that no class
/// could take because every class hit its route limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetPlan {
    routes: Vec<AssignedRoute>,
    unassigned: Vec<usize>,
}

impl FleetPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route.
    pub fn add_route(&mut self, vehicle_class: impl Into<String>, plan: RoutePlan) {
        self.routes.push(AssignedRoute {
            vehicle_class: vehicle_class.into(),
            plan,
        });
    }

    /// Marks a delivery location as not covered.
    pub fn add_unassigned(&mut self, location: usize) {
        self.unassigned.push(location);
    }

    /// Routes in acceptance order.
    pub fn routes(&self) -> &[AssignedRoute] {
        &self.routes
    }

    /// Routes run by the given class.
    pub fn routes_for<'a>(&'a self, vehicle_class: &'a str) -> impl Iterator<Item = &'a RoutePlan> {
        self.routes
            .iter()
            .filter(move |r| r.vehicle_class == vehicle_class)
            .map(|r| &r.plan)
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Uncovered delivery locations.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Returns `true` if every delivery location was covered.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Totals across every route.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::from_routes(self.routes.iter().map(|r| &r.plan))
    }
}
