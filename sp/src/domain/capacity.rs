//! Daily capacity and plan horizon

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Hours available per day over a fixed number of days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub hours_per_day: f64,
    pub total_days: u32,
}

impl Capacity {
    /// Create a capacity, rejecting non-positive hours and an empty horizon
    pub fn new(hours_per_day: f64, total_days: u32) -> Result<Self, PlanError> {
        if !hours_per_day.is_finite() || hours_per_day <= 0.0 {
            return Err(PlanError::InvalidHoursPerDay(hours_per_day));
        }
        if total_days == 0 {
            return Err(PlanError::InvalidTotalDays);
        }
        Ok(Self {
            hours_per_day,
            total_days,
        })
    }

    /// Total hours across the horizon
    pub fn total_hours(&self) -> f64 {
        self.hours_per_day * self.total_days as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_accepts_positive_values() {
        let capacity = Capacity::new(2.5, 4).unwrap();
        assert_eq!(capacity.total_hours(), 10.0);
    }

    #[test]
    fn test_capacity_rejects_bad_hours() {
        assert_eq!(Capacity::new(0.0, 3), Err(PlanError::InvalidHoursPerDay(0.0)));
        assert_eq!(Capacity::new(-1.0, 3), Err(PlanError::InvalidHoursPerDay(-1.0)));
        assert!(Capacity::new(f64::NAN, 3).is_err());
        assert!(Capacity::new(f64::INFINITY, 3).is_err());
    }

    #[test]
    fn test_capacity_rejects_zero_days() {
        assert_eq!(Capacity::new(2.0, 0), Err(PlanError::InvalidTotalDays));
    }
}
