//! Location types: plain stops, delivery locations, and distribution centers.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Variant-specific payload of a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationKind {
    /// A location with no demand or supply.
    Plain,
    /// A customer with a package demand.
    Delivery {
        /// Number of packages to deliver.
        packages: u32,
    },
    /// A depot holding inventory. Inventory is informational only.
    DistributionCenter {
        /// Units in stock.
        inventory: u32,
    },
}

/// Filter for counting locations by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFilter {
    /// Plain locations.
    Plain,
    /// Delivery locations.
    Delivery,
    /// Distribution centers.
    DistributionCenter,
}

impl LocationFilter {
    /// Returns `true` if `kind` belongs to this filter's variant.
    pub fn matches(&self, kind: &LocationKind) -> bool {
        matches!(
            (self, kind),
            (LocationFilter::Plain, LocationKind::Plain)
                | (LocationFilter::Delivery, LocationKind::Delivery { .. })
                | (
                    LocationFilter::DistributionCenter,
                    LocationKind::DistributionCenter { .. }
                )
        )
    }
}

/// A named address in the road network.
///
/// Identity is the address alone: two locations with the same address are
/// equal and hash the same regardless of name or kind.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::Location;
///
/// let a = Location::delivery("Smith", "1 Main St", 12);
/// let b = Location::plain("", "1 Main St");
/// assert_eq!(a, b);
/// assert_eq!(a.packages(), Some(12));
/// assert_eq!(b.packages(), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    name: String,
    address: String,
    kind: LocationKind,
}

impl Location {
    /// Creates a location of the given kind.
    pub fn new(name: impl Into<String>, address: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            kind,
        }
    }

    /// Creates a plain location.
    pub fn plain(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(name, address, LocationKind::Plain)
    }

    /// Creates a delivery location with the given package demand.
    pub fn delivery(name: impl Into<String>, address: impl Into<String>, packages: u32) -> Self {
        Self::new(name, address, LocationKind::Delivery { packages })
    }

    /// Creates a distribution center with the given inventory.
    pub fn distribution_center(
        name: impl Into<String>,
        address: impl Into<String>,
        inventory: u32,
    ) -> Self {
        Self::new(name, address, LocationKind::DistributionCenter { inventory })
    }

    /// Display name (may be empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Address, the identity key.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Variant payload.
    pub fn kind(&self) -> &LocationKind {
        &self.kind
    }

    /// Package demand, if this is a delivery location.
    pub fn packages(&self) -> Option<u32> {
        match self.kind {
            LocationKind::Delivery { packages } => Some(packages),
            _ => None,
        }
    }

    /// Inventory, if this is a distribution center.
    pub fn inventory(&self) -> Option<u32> {
        match self.kind {
            LocationKind::DistributionCenter { inventory } => Some(inventory),
            _ => None,
        }
    }

    /// Returns `true` for delivery locations.
    pub fn is_delivery(&self) -> bool {
        matches!(self.kind, LocationKind::Delivery { .. })
    }

    /// Returns `true` for distribution centers.
    pub fn is_distribution_center(&self) -> bool {
        matches!(self.kind, LocationKind::DistributionCenter { .. })
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.address)
        } else {
            write!(f, "{} ({})", self.name, self.address)
        }
    }
}
