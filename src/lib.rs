//! # delivery-routing
//!
//! Delivery route planning for capacity-limited vehicles leaving a single
//! distribution center, driven by pairwise travel times between addresses.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Location, Trip, RoutePlan, VehicleClass, FleetPlan)
//! - [`distance`]: Directed travel-time matrix
//! - [`constructive`]: Capacity-bounded greedy spanning tree
//! - [`local_search`]: Tour improvement (exact permutation search, triangle swap)
//! - [`planner`]: Candidate ranking and greedy multi-route assignment
//! - [`error`]: Error type
//!
//! The crate performs no I/O. Travel times come in as [`models::Trip`]s from
//! whatever source the caller uses; plans go out as [`models::RoutePlan`]s.
//! Events are emitted through `tracing`; install a subscriber to see them.

pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod planner;

pub use error::{Result, RoutingError};
