//! Directed travel-time edges between two locations.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Location;
use crate::error::{Result, RoutingError};

/// A directed edge from `origin` to `destination` with a travel time in seconds.
///
/// Equality compares origin, destination, and travel time. The hash covers
/// the endpoints only, which stays consistent with equality.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{Location, Trip};
///
/// let a = Location::plain("", "1 Main St");
/// let b = Location::plain("", "2 Main St");
/// let trip = Trip::new(a.clone(), b, 300).unwrap();
/// assert_eq!(trip.travel_time(), 300);
///
/// assert!(Trip::new(a.clone(), a, 10).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTrip")]
pub struct Trip {
    origin: Location,
    destination: Location,
    travel_time: u64,
}

#[derive(Deserialize)]
struct RawTrip {
    origin: Location,
    destination: Location,
    travel_time: u64,
}

impl TryFrom<RawTrip> for Trip {
    type Error = RoutingError;

    fn try_from(raw: RawTrip) -> Result<Self> {
        Trip::new(raw.origin, raw.destination, raw.travel_time)
    }
}

impl Trip {
    /// Creates a trip.
    ///
    /// Fails if either address is empty or both endpoints share an address.
    pub fn new(origin: Location, destination: Location, travel_time: u64) -> Result<Self> {
        if origin.address().is_empty() || destination.address().is_empty() {
            return Err(RoutingError::EmptyAddress);
        }
        if origin == destination {
            return Err(RoutingError::SameEndpoints {
                address: origin.address().to_string(),
            });
        }
        Ok(Self {
            origin,
            destination,
            travel_time,
        })
    }

    /// Start of the edge.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// End of the edge.
    pub fn destination(&self) -> &Location {
        &self.destination
    }

    /// Travel time in seconds.
    pub fn travel_time(&self) -> u64 {
        self.travel_time
    }
}

impl PartialEq for Trip {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.destination == other.destination
            && self.travel_time == other.travel_time
    }
}

impl Eq for Trip {}

impl Hash for Trip {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.destination.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn a() -> Location {
        Location::delivery("A", "1 Main St", 3)
    }

    fn b() -> Location {
        Location::distribution_center("B", "2 Main St", 0)
    }

    #[test]
    fn test_trip_new() {
        let t = Trip::new(a(), b(), 42).expect("valid");
        assert_eq!(t.origin().address(), "1 Main St");
        assert_eq!(t.destination().address(), "2 Main St");
        assert_eq!(t.travel_time(), 42);
    }

    #[test]
    fn test_same_address_rejected() {
        let other = Location::plain("Other name", "1 Main St");
        assert_eq!(
            Trip::new(a(), other, 5),
            Err(RoutingError::SameEndpoints {
                address: "1 Main St".into()
            })
        );
    }

    #[test]
    fn test_empty_address_rejected() {
        assert_eq!(
            Trip::new(Location::plain("x", ""), b(), 5),
            Err(RoutingError::EmptyAddress)
        );
    }

    #[test]
    fn test_equality_includes_travel_time() {
        let t1 = Trip::new(a(), b(), 10).expect("valid");
        let t2 = Trip::new(a(), b(), 10).expect("valid");
        let t3 = Trip::new(a(), b(), 11).expect("valid");
        let t4 = Trip::new(b(), a(), 10).expect("valid");
        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
        assert_ne!(t1, t4);

        let set: HashSet<Trip> = [t1, t2, t3, t4].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_deserialize_validates() {
        let t = Trip::new(a(), b(), 10).expect("valid");
        let json = serde_json::to_string(&t).expect("serialize");
        let back: Trip = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, t);

        let bad = json.replace("2 Main St", "1 Main St");
        assert!(serde_json::from_str::<Trip>(&bad).is_err());
    }
}
