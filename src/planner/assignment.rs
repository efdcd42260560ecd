//! Greedy multi-route assignment.
//!
//! # Algorithm
//!
//! While deliveries remain, rank one candidate tour per undelivered stop by
//! cost per package, then scan the ranking and accept every tour whose stops
//! are all still undelivered. Accepting a tour removes its stops before the
//! next candidate is checked, so overlapping candidates later in the same
//! pass are skipped. The best-ranked candidate always qualifies, so every
//! pass accepts at least one route and the loop terminates.
//!
//! The iterator is lazy: each `next` runs at most one candidate-generation
//! pass. Dropping it between items abandons the remaining work.

use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use super::RoutePlanner;
use crate::models::RoutePlan;

/// Lazily yields route plans until every selected delivery is covered.
///
/// Created by [`RoutePlanner::plan_single_vehicle_class`] and
/// [`RoutePlanner::plan`].
#[derive(Debug, Clone)]
pub struct RoutePlans<'a> {
    planner: &'a RoutePlanner,
    depot: usize,
    max_payload: u32,
    avg_unload_time: u64,
    undelivered: BTreeSet<usize>,
    pending: VecDeque<Vec<usize>>,
    passes: usize,
}

impl<'a> RoutePlans<'a> {
    pub(crate) fn new(
        planner: &'a RoutePlanner,
        depot: usize,
        undelivered: BTreeSet<usize>,
        max_payload: u32,
        avg_unload_time: u64,
    ) -> Self {
        Self {
            planner,
            depot,
            max_payload,
            avg_unload_time,
            undelivered,
            pending: VecDeque::new(),
            passes: 0,
        }
    }

    /// Delivery locations not yet covered by an emitted route.
    pub fn undelivered(&self) -> &BTreeSet<usize> {
        &self.undelivered
    }

    /// Number of candidate-generation passes run so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Consumes the iterator, returning the uncovered locations.
    pub fn into_undelivered(self) -> BTreeSet<usize> {
        self.undelivered
    }
}

impl Iterator for RoutePlans<'_> {
    type Item = RoutePlan;

    fn next(&mut self) -> Option<RoutePlan> {
        loop {
            while let Some(tour) = self.pending.pop_front() {
                let stops = &tour[1..tour.len() - 1];
                if stops.iter().all(|s| self.undelivered.contains(s)) {
                    for s in stops {
                        self.undelivered.remove(s);
                    }
                    let plan = self.planner.route_plan(&tour, self.avg_unload_time);
                    debug!(
                        pass = self.passes,
                        stops = stops.len(),
                        travel_time = plan.travel_time,
                        packages = plan.total_packages,
                        remaining = self.undelivered.len(),
                        "accepted route"
                    );
                    return Some(plan);
                }
            }

            if self.undelivered.is_empty() {
                return None;
            }

            self.passes += 1;
            let candidates =
                self.planner
                    .candidate_tours(self.depot, &self.undelivered, self.max_payload);
            debug!(
                pass = self.passes,
                undelivered = self.undelivered.len(),
                candidates = candidates.len(),
                "ranked candidate routes"
            );
            self.pending = candidates.into();
        }
    }
}
