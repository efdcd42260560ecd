//! Vehicle classes used for fleet planning.

use serde::{Deserialize, Serialize};

/// A kind of delivery vehicle, identified by name and payload cap.
///
/// `max_routes` limits how many trips this class may run in a fleet plan;
/// `None` means unlimited.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::VehicleClass;
///
/// let van = VehicleClass::new("van", 120).with_max_routes(3);
/// assert_eq!(van.name(), "van");
/// assert_eq!(van.max_payload(), 120);
/// assert_eq!(van.max_routes(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleClass {
    name: String,
    max_payload: u32,
    #[serde(default)]
    max_routes: Option<usize>,
}

impl VehicleClass {
    /// Creates a vehicle class with unlimited routes.
    pub fn new(name: impl Into<String>, max_payload: u32) -> Self {
        Self {
            name: name.into(),
            max_payload,
            max_routes: None,
        }
    }

    /// Caps the number of routes this class may run.
    pub fn with_max_routes(mut self, max_routes: usize) -> Self {
        self.max_routes = Some(max_routes);
        self
    }

    /// Class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum packages carried per route.
    pub fn max_payload(&self) -> u32 {
        self.max_payload
    }

    /// Route limit, if any.
    pub fn max_routes(&self) -> Option<usize> {
        self.max_routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_class_new() {
        let v = VehicleClass::new("truck", 330);
        assert_eq!(v.name(), "truck");
        assert_eq!(v.max_payload(), 330);
        assert!(v.max_routes().is_none());
    }

    #[test]
    fn test_deserialize_without_limit() {
        let v: VehicleClass =
            serde_json::from_str(r#"{"name":"van","max_payload":100}"#).expect("valid json");
        assert_eq!(v, VehicleClass::new("van", 100));
    }
}
