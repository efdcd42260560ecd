//! Route plan records emitted by the planner.

use serde::{Deserialize, Serialize};

use super::Location;

const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// One accepted vehicle trip: depot, stops, depot.
///
/// Times are in seconds.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Location, RoutePlan};
///
/// let depot = Location::distribution_center("Depot", "9 Dock Rd", 0);
/// let stop = Location::delivery("", "1 Main St", 4);
/// let plan = RoutePlan {
///     travel_time: 600,
///     total_packages: 4,
///     delivery_time: 40,
///     stops: vec![depot.clone(), stop, depot],
/// };
/// assert_eq!(plan.total_time(), 640);
/// assert_eq!(plan.num_deliveries(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Sum of edge travel times along the closed tour.
    pub travel_time: u64,
    /// Packages delivered on this route.
    pub total_packages: u64,
    /// Unload time: `total_packages × avg_unload_time`.
    pub delivery_time: u64,
    /// Visited locations, starting and ending at the depot.
    pub stops: Vec<Location>,
}

impl RoutePlan {
    /// Travel time plus unload time.
    pub fn total_time(&self) -> u64 {
        self.travel_time.saturating_add(self.delivery_time)
    }

    /// Number of stops between the two depot visits.
    pub fn num_deliveries(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }

    /// The interior stops, without the leading and trailing depot.
    pub fn deliveries(&self) -> &[Location] {
        if self.stops.len() < 2 {
            return &[];
        }
        &self.stops[1..self.stops.len() - 1]
    }

    /// Builds a Google Maps directions URL through every stop in order.
    pub fn directions_url(&self) -> String {
        let mut url = String::from(DIRECTIONS_BASE_URL);
        for stop in &self.stops {
            url.push_str(&stop.address().replace(' ', "+"));
            url.push('/');
        }
        url
    }
}
