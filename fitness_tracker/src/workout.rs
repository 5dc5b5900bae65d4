use crate::{RaceWalking, Running, SensorData, Swimming, Training, WorkoutKind};

/// Any of the supported trainings
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Workout {
    Running(Running),
    RaceWalking(RaceWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(this) => this,
            Self::RaceWalking(this) => this,
            Self::Swimming(this) => this,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn data(&self) -> &SensorData {
        self.as_training().data()
    }

    fn step_length(&self) -> f64 {
        self.as_training().step_length()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn calories(&self) -> f64 {
        self.as_training().calories()
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<RaceWalking> for Workout {
    fn from(value: RaceWalking) -> Self {
        Self::RaceWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}
