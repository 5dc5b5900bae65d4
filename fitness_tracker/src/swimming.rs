use crate::{
    METERS_PER_KM, Result, SensorData, Training, WorkoutKind,
    training::{checked, positive},
};

/// Length of one stroke in meters
pub const STROKE_LENGTH_M: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming in a pool.
///
/// Mean speed comes from pool geometry, strokes only affect [`Training::distance`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Swimming {
    pub data: SensorData,
    pub pool_length_m: f64,
    pub pool_laps: u64,
}

impl Swimming {
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u64,
    ) -> Result<Self> {
        checked(Self {
            data: SensorData::new(action_count, duration_hours, weight_kg)?,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            pool_laps,
        })
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn data(&self) -> &SensorData {
        &self.data
    }

    fn step_length(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length_m * self.pool_laps as f64 / METERS_PER_KM / self.data.duration_hours
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.data.weight_kg
            * self.data.duration_hours
    }
}
