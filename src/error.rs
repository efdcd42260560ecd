//! Error type shared by the matrix, models, and planner.

use std::fmt;

/// Errors raised at the API boundary.
///
/// All variants describe contract violations by the caller (bad ranges,
/// malformed graphs, misconfigured planning requests). None of them are
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// A trip's origin and destination share the same address.
    SameEndpoints {
        /// The shared address.
        address: String,
    },
    /// A trip endpoint has an empty address.
    EmptyAddress,
    /// A `min > max` range was passed to a range query.
    InvalidRange {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },
    /// A location index is not part of the matrix.
    LocationOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of locations in the matrix.
        count: usize,
    },
    /// The depot index does not refer to a distribution center.
    NotADistributionCenter {
        /// Offending index.
        index: usize,
    },
    /// Strict matrix construction found ordered pairs with no trip.
    MissingEdges {
        /// Number of absent off-diagonal edges.
        count: usize,
    },
    /// A fleet plan was requested without any vehicle class.
    InvalidFleet,
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RoutingError::SameEndpoints { address } => {
                write!(f, "trip origin and destination share address '{address}'")
            }
            RoutingError::EmptyAddress => write!(f, "location address must not be empty"),
            RoutingError::InvalidRange { min, max } => {
                write!(f, "invalid range: min {min} is greater than max {max}")
            }
            RoutingError::LocationOutOfRange { index, count } => {
                write!(f, "location index {index} out of range ({count} locations)")
            }
            RoutingError::NotADistributionCenter { index } => {
                write!(f, "location {index} is not a distribution center")
            }
            RoutingError::MissingEdges { count } => {
                write!(f, "travel matrix is missing {count} edge(s)")
            }
            RoutingError::InvalidFleet => write!(f, "fleet must contain at least one vehicle class"),
        }
    }
}

impl std::error::Error for RoutingError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = RoutingError::InvalidRange { min: 5, max: 2 };
        assert_eq!(e.to_string(), "invalid range: min 5 is greater than max 2");

        let e = RoutingError::NotADistributionCenter { index: 3 };
        assert_eq!(e.to_string(), "location 3 is not a distribution center");
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&RoutingError::EmptyAddress);
    }
}
