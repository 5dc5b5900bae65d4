use crate::WorkoutKind;

/// Computed statistics of a single training
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub training_type: WorkoutKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

/// One line message, every number has exactly 3 decimal places
impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            training_type,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        } = self;

        write!(
            f,
            "Training type: {training_type}; \
             Duration: {duration_hours:.3} h; \
             Distance: {distance_km:.3} km; \
             Avg speed: {mean_speed_kmh:.3} km/h; \
             Calories: {calories:.3}."
        )
    }
}
