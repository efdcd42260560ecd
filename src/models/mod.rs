//! Domain model types for delivery routing.
//!
//! Provides locations (plain, delivery, distribution center), directed
//! trips between them, vehicle classes, and the route plan records the
//! planner emits.

mod location;
mod route;
mod solution;
mod trip;
mod vehicle;

pub use location::{Location, LocationFilter, LocationKind};
pub use route::RoutePlan;
pub use solution::{AssignedRoute, FleetPlan, PlanSummary};
pub use trip::Trip;
pub use vehicle::VehicleClass;
