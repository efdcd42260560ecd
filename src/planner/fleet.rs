//! Planning with several vehicle classes.
//!
//! Classes run largest payload first. Each class takes routes from the
//! single-class assignment over whatever is still undelivered, up to its
//! route limit; the next class picks up the rest.

use std::collections::BTreeSet;

use tracing::{debug, info};

use super::{RoutePlanner, RoutePlans};
use crate::error::{Result, RoutingError};
use crate::models::{FleetPlan, VehicleClass};

impl RoutePlanner {
    /// Covers every delivery location with routes from the given classes.
    ///
    /// Classes are used in descending `max_payload` order (ties keep the
    /// given order). Locations left once every class has reached its route
    /// limit are reported in [`FleetPlan::unassigned`].
    ///
    /// Fails if `classes` is empty or `depot` is not a distribution center.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_routing::models::{Location, Trip, VehicleClass};
    /// use delivery_routing::planner::RoutePlanner;
    ///
    /// let locs = [
    ///     Location::distribution_center("Depot", "D", 0),
    ///     Location::delivery("", "A", 60),
    ///     Location::delivery("", "B", 30),
    /// ];
    /// let mut trips = Vec::new();
    /// for a in &locs {
    ///     for b in &locs {
    ///         if a != b {
    ///             trips.push(Trip::new(a.clone(), b.clone(), 10).unwrap());
    ///         }
    ///     }
    /// }
    /// let planner = RoutePlanner::from_trips(trips);
    /// let fleet = [VehicleClass::new("van", 40), VehicleClass::new("truck", 100).with_max_routes(1)];
    ///
    /// let plan = planner.plan_fleet(0, &fleet, 0).unwrap();
    /// assert_eq!(plan.num_routes(), 1);
    /// assert_eq!(plan.routes()[0].vehicle_class, "truck");
    /// assert!(plan.is_complete());
    /// ```
    pub fn plan_fleet(
        &self,
        depot: usize,
        classes: &[VehicleClass],
        avg_unload_time: u64,
    ) -> Result<FleetPlan> {
        if classes.is_empty() {
            return Err(RoutingError::InvalidFleet);
        }
        self.check_depot(depot)?;

        let mut order: Vec<&VehicleClass> = classes.iter().collect();
        order.sort_by(|a, b| b.max_payload().cmp(&a.max_payload()));

        let mut undelivered: BTreeSet<usize> = self
            .matrix()
            .delivery_locations(0, u32::MAX)?
            .into_iter()
            .collect();
        let mut plan = FleetPlan::new();

        for class in order {
            if undelivered.is_empty() {
                break;
            }
            let limit = class.max_routes().unwrap_or(usize::MAX);
            let mut routes = RoutePlans::new(
                self,
                depot,
                undelivered,
                class.max_payload(),
                avg_unload_time,
            );
            for route in routes.by_ref().take(limit) {
                plan.add_route(class.name(), route);
            }
            undelivered = routes.into_undelivered();
            debug!(
                class = class.name(),
                routes = plan.routes_for(class.name()).count(),
                remaining = undelivered.len(),
                "vehicle class done"
            );
        }

        for location in undelivered {
            plan.add_unassigned(location);
        }

        info!(
            routes = plan.num_routes(),
            unassigned = plan.unassigned().len(),
            "fleet plan complete"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::golden_planner;
    use super::*;

    fn stop_addresses(plan: &crate::models::RoutePlan) -> Vec<&str> {
        plan.stops.iter().map(|s| s.address()).collect()
    }

    #[test]
    fn test_empty_fleet_rejected() {
        let planner = golden_planner();
        assert_eq!(planner.plan_fleet(0, &[], 0), Err(RoutingError::InvalidFleet));
    }

    #[test]
    fn test_depot_checked() {
        let planner = golden_planner();
        let fleet = [VehicleClass::new("truck", 100)];
        assert_eq!(
            planner.plan_fleet(1, &fleet, 0),
            Err(RoutingError::NotADistributionCenter { index: 1 })
        );
    }

    #[test]
    fn test_large_class_first_then_small() {
        let planner = golden_planner();
        let fleet = [
            VehicleClass::new("van", 60),
            VehicleClass::new("truck", 100).with_max_routes(1),
        ];
        let plan = planner.plan_fleet(0, &fleet, 10).expect("valid fleet");

        assert!(plan.is_complete());
        assert_eq!(plan.num_routes(), 3);

        let truck: Vec<_> = plan.routes_for("truck").collect();
        assert_eq!(truck.len(), 1);
        assert_eq!(stop_addresses(truck[0]), vec!["D", "S1", "S2", "D"]);

        let van: Vec<_> = plan.routes_for("van").collect();
        assert_eq!(van.len(), 2);
        assert_eq!(stop_addresses(van[0]), vec!["D", "S3", "D"]);
        assert_eq!(van[0].travel_time, 58);
        assert_eq!(stop_addresses(van[1]), vec!["D", "S4", "D"]);
        assert_eq!(van[1].travel_time, 29);

        let summary = plan.summary();
        assert_eq!(summary.total_packages, 140);
        assert_eq!(summary.total_travel_time, 40 + 58 + 29);
        assert_eq!(summary.total_unload_time, 1400);
    }

    #[test]
    fn test_route_limits_leave_unassigned() {
        let planner = golden_planner();
        let fleet = [
            VehicleClass::new("truck", 100).with_max_routes(1),
            VehicleClass::new("van", 60).with_max_routes(1),
        ];
        let plan = planner.plan_fleet(0, &fleet, 0).expect("valid fleet");
        assert_eq!(plan.num_routes(), 2);
        assert_eq!(plan.unassigned(), &[4]);
    }

    #[test]
    fn test_unlimited_single_class_matches_single_vehicle_plan() {
        let planner = golden_planner();
        let fleet = [VehicleClass::new("truck", 100)];
        let plan = planner.plan_fleet(0, &fleet, 11).expect("valid fleet");
        let single: Vec<_> = planner
            .plan_single_vehicle_class(0, 0, u32::MAX, 100, 11)
            .expect("valid request")
            .collect();
        let fleet_routes: Vec<_> = plan.routes().iter().map(|r| r.plan.clone()).collect();
        assert_eq!(fleet_routes, single);
    }
}
