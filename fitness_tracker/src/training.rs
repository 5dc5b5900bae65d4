use crate::{Error, METERS_PER_KM, Result, STEP_LENGTH_M, Summary, WorkoutKind};

/// Readings every training starts from
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorData {
    /// Steps or strokes
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl SensorData {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            action_count,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }

    #[inline]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_hours * crate::MINUTES_PER_HOUR
    }
}

/// Shared capability of every kind of training.
///
/// Only [`Training::calories`] has no default: each training has its own formula.
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    fn data(&self) -> &SensorData;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Distance covered by a single action, meters
    fn step_length(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        self.data().action_count as f64 * self.step_length() / METERS_PER_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.data().duration_hours
    }

    /// Spent kilocalories
    fn calories(&self) -> f64;

    fn summary(&self) -> Summary {
        Summary {
            training_type: self.kind(),
            duration_hours: self.data().duration_hours,
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed(),
            calories: self.calories(),
        }
    }
}

/// Rejects readings whose metrics overflow to infinity or NaN
pub(crate) fn checked<T: Training>(training: T) -> Result<T> {
    for (field, value) in [
        ("distance_km", training.distance()),
        ("mean_speed_kmh", training.mean_speed()),
        ("calories", training.calories()),
    ] {
        if !value.is_finite() {
            return Err(Error::InvalidMagnitude { field, value });
        }
    }

    Ok(training)
}

/// Accepts only finite values above zero
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64> {
    match value.is_finite() && value > 0.0 {
        true => Ok(value),
        false => Err(Error::InvalidMagnitude { field, value }),
    }
}

/// Largest count an `f64` holds without losing whole numbers, 2^53
const MAX_COUNT: f64 = 9_007_199_254_740_992.0;

/// Accepts only non-negative whole numbers up to [`MAX_COUNT`]
pub(crate) fn count(field: &'static str, value: f64) -> Result<u64> {
    match (0.0..=MAX_COUNT).contains(&value) && value.fract() == 0.0 {
        true => Ok(value as u64),
        false => Err(Error::InvalidMagnitude { field, value }),
    }
}
