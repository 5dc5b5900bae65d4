//! Calories for race walking depend on speed in m/s and height of the sportsman:
//!
//! ```notrust
//! (0.035 * weight + (speed_ms ^ 2 / height_m) * 0.029 * weight) * duration_minutes
//! ```

use crate::{
    Result, SensorData, Training, WorkoutKind,
    training::{checked, positive},
};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RaceWalking {
    pub data: SensorData,
    pub height_cm: f64,
}

impl RaceWalking {
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        checked(Self {
            data: SensorData::new(action_count, duration_hours, weight_kg)?,
            height_cm: positive("height_cm", height_cm)?,
        })
    }
}

impl Training for RaceWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::RaceWalking
    }

    fn data(&self) -> &SensorData {
        &self.data
    }

    fn calories(&self) -> f64 {
        let speed_ms = self.mean_speed() * KMH_IN_MS;
        let height_m = self.height_cm / CM_IN_M;
        let weight = self.data.weight_kg;

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / height_m) * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.data.duration_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walking(action_count: u64, duration: f64, weight: f64, height: f64) -> RaceWalking {
        RaceWalking::new(action_count, duration, weight, height).unwrap()
    }

    #[test]
    fn test_uses_base_step_length() {
        let walk = walking(9000, 1.0, 75.0, 180.0);
        assert!((walk.distance() - 5.85).abs() < 1e-9);
        assert!((walk.mean_speed() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn test_calories() {
        assert!((walking(9000, 1.0, 75.0, 180.0).calories() - 349.252).abs() < 5e-4);
        assert!((walking(420, 4.0, 20.0, 42.0).calories() - 168.119).abs() < 5e-4);
        assert!((walking(1206, 12.0, 6.0, 12.0).calories() - 151.544).abs() < 5e-4);
    }

    #[test]
    fn test_taller_walker_burns_less() {
        let short = walking(9000, 1.0, 75.0, 160.0);
        let tall = walking(9000, 1.0, 75.0, 200.0);
        assert!(short.calories() > tall.calories());
    }

    #[test]
    fn test_rejects_zero_height() {
        assert!(matches!(
            RaceWalking::new(9000, 1.0, 75.0, 0.0),
            Err(crate::Error::InvalidMagnitude {
                field: "height_cm",
                ..
            })
        ));
    }
}
