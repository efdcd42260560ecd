//! Planning parameters.

use serde::{Deserialize, Serialize};

/// Parameters for single-vehicle-class planning.
///
/// Defaults: every delivery location regardless of package count, a 330
/// package payload, and 11 seconds of unload time per package.
///
/// # Examples
///
/// ```
/// use delivery_routing::planner::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_max_payload(100)
///     .with_avg_unload_time(30);
/// assert_eq!(config.max_payload(), 100);
/// assert_eq!(config.avg_unload_time(), 30);
/// assert_eq!(config.min_packages(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    min_packages: u32,
    max_packages: u32,
    max_payload: u32,
    avg_unload_time: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_packages: 0,
            max_packages: u32::MAX,
            max_payload: 330,
            avg_unload_time: 11,
        }
    }
}

impl PlannerConfig {
    /// Restricts planning to delivery locations with
    /// `min_packages <= packages <= max_packages`.
    ///
    /// The range is validated when planning starts.
    pub fn with_package_range(mut self, min_packages: u32, max_packages: u32) -> Self {
        self.min_packages = min_packages;
        self.max_packages = max_packages;
        self
    }

    /// Sets the vehicle payload cap.
    pub fn with_max_payload(mut self, max_payload: u32) -> Self {
        self.max_payload = max_payload;
        self
    }

    /// Sets the unload time per package, in seconds.
    pub fn with_avg_unload_time(mut self, seconds: u64) -> Self {
        self.avg_unload_time = seconds;
        self
    }

    /// Smallest package count included.
    pub fn min_packages(&self) -> u32 {
        self.min_packages
    }

    /// Largest package count included.
    pub fn max_packages(&self) -> u32 {
        self.max_packages
    }

    /// Vehicle payload cap.
    pub fn max_payload(&self) -> u32 {
        self.max_payload
    }

    /// Unload seconds per package.
    pub fn avg_unload_time(&self) -> u64 {
        self.avg_unload_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = PlannerConfig::default();
        assert_eq!(c.min_packages(), 0);
        assert_eq!(c.max_packages(), u32::MAX);
        assert_eq!(c.max_payload(), 330);
        assert_eq!(c.avg_unload_time(), 11);
    }

    #[test]
    fn test_builder() {
        let c = PlannerConfig::default()
            .with_package_range(5, 50)
            .with_max_payload(120)
            .with_avg_unload_time(20);
        assert_eq!(c.min_packages(), 5);
        assert_eq!(c.max_packages(), 50);
        assert_eq!(c.max_payload(), 120);
        assert_eq!(c.avg_unload_time(), 20);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: PlannerConfig =
            serde_json::from_str(r#"{"max_payload": 80}"#).expect("valid json");
        assert_eq!(c, PlannerConfig::default().with_max_payload(80));
    }
}
