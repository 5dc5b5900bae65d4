use crate::{METERS_PER_KM, Result, SensorData, Training, WorkoutKind, training::checked};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Running {
    pub data: SensorData,
}

impl Running {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        checked(Self {
            data: SensorData::new(action_count, duration_hours, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn data(&self) -> &SensorData {
        &self.data
    }

    fn calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * self.data.weight_kg
            / METERS_PER_KM
            * self.data.duration_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_and_speed() {
        let running = Running::new(15000, 1.0, 75.0).unwrap();
        assert!((running.distance() - 9.75).abs() < 1e-9);
        assert!((running.mean_speed() - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_calories() {
        let running = Running::new(15000, 1.0, 75.0).unwrap();
        assert!((running.calories() - 797.805).abs() < 1e-9);
    }

    #[test]
    fn test_longer_run_halves_speed() {
        let running = Running::new(15000, 2.0, 75.0).unwrap();
        assert!((running.mean_speed() - 4.875).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_infinite_calories() {
        assert!(matches!(
            Running::new(15000, 1.0, 1e308),
            Err(crate::Error::InvalidMagnitude {
                field: "calories",
                ..
            })
        ));
    }

    #[test]
    fn test_no_steps() {
        let running = Running::new(0, 1.0, 75.0).unwrap();
        assert_eq!(running.distance(), 0.0);
        assert_eq!(running.mean_speed(), 0.0);
        // (18 * 0 + 1.79) * 75 / 1000 * 60
        assert!((running.calories() - 8.055).abs() < 1e-9);
    }
}
