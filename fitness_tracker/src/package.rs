use crate::{
    Error, RaceWalking, Result, Running, Swimming, Training, Workout, WorkoutKind,
    training::count,
};

/// Raw package received from sensors: workout code and positional values
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Package<'a> {
    pub code: &'a str,
    pub args: &'a [f64],
}

impl<'a> From<(&'a str, &'a [f64])> for Package<'a> {
    fn from((code, args): (&'a str, &'a [f64])) -> Self {
        Self { code, args }
    }
}

pub const SAMPLE_PACKAGES: [Package<'static>; 5] = [
    Package {
        code: "SWM",
        args: &[720.0, 1.0, 80.0, 25.0, 40.0],
    },
    Package {
        code: "RUN",
        args: &[15000.0, 1.0, 75.0],
    },
    Package {
        code: "WLK",
        args: &[9000.0, 1.0, 75.0, 180.0],
    },
    Package {
        code: "WLK",
        args: &[420.0, 4.0, 20.0, 42.0],
    },
    Package {
        code: "WLK",
        args: &[1206.0, 12.0, 6.0, 12.0],
    },
];

/// Build a workout from a sensor package.
///
/// # Params
/// - `code` - one of `SWM`, `RUN`, `WLK`
/// - `args` - `action_count, duration_hours, weight_kg` followed by `height_cm` for `WLK`
///   or by `pool_length_m, pool_laps` for `SWM`
pub fn read_package(code: &str, args: &[f64]) -> Result<Workout> {
    let workout = code.parse::<WorkoutKind>().and_then(|kind| build(kind, args));

    match &workout {
        Ok(workout) => tracing::debug!(code, ?args, ?workout, "package read"),
        Err(error) => tracing::warn!(code, ?args, %error, "failed to read package"),
    }

    workout
}

fn build(kind: WorkoutKind, args: &[f64]) -> Result<Workout> {
    if args.len() != kind.arity() {
        return Err(Error::ArgumentArity {
            kind,
            expected: kind.arity(),
            actual: args.len(),
        });
    }

    let (action_count, duration_hours, weight_kg) =
        (count("action_count", args[0])?, args[1], args[2]);

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action_count, duration_hours, weight_kg)?.into(),
        WorkoutKind::RaceWalking => {
            RaceWalking::new(action_count, duration_hours, weight_kg, args[3])?.into()
        }
        WorkoutKind::Swimming => Swimming::new(
            action_count,
            duration_hours,
            weight_kg,
            args[3],
            count("pool_laps", args[4])?,
        )?
        .into(),
    };

    Ok(workout)
}

/// Message with training summary
pub fn render<T: Training + ?Sized>(workout: &T) -> String {
    let message = workout.summary().to_string();

    tracing::debug!(%message, "rendered");

    message
}

/// Render every package in input order. Stops at the first broken package.
pub fn process<'a, P: Into<Package<'a>>>(
    packages: impl IntoIterator<Item = P>,
) -> Result<Vec<String>> {
    packages
        .into_iter()
        .map(|this| {
            let Package { code, args } = this.into();

            read_package(code, args).map(|workout| render(&workout))
        })
        .collect()
}
