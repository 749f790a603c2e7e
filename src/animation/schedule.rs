use crate::foundation::error::{FlagError, FlagResult};

/// Seconds spent in each part of the animation cycle.
///
/// One cycle is: hold the proportional flag, transition to the default flag, hold the default
/// flag, transition back. Both transitions take `transition` seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Durations {
    pub proportional: f64,
    pub transition: f64,
    pub default: f64,
}

impl Durations {
    /// 10s proportional, 2s transitions, 5s default.
    pub const STANDARD: Durations = Durations::new(10.0, 2.0, 5.0);

    /// 3s proportional, 0.5s transitions, 3s default.
    pub const QUICK: Durations = Durations::new(3.0, 0.5, 3.0);

    /// Durations in seconds; checked when a [`Schedule`] is built.
    pub const fn new(proportional: f64, transition: f64, default: f64) -> Self {
        Self {
            proportional,
            transition,
            default,
        }
    }

    /// Length of one full cycle.
    pub fn total(&self) -> f64 {
        self.proportional + 2.0 * self.transition + self.default
    }

    /// Reject negative or non-finite parts and an empty cycle.
    pub fn validate(&self) -> FlagResult<()> {
        for (name, v) in [
            ("proportional", self.proportional),
            ("transition", self.transition),
            ("default", self.default),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(FlagError::invalid_configuration(format!(
                    "{name} duration must be finite and >= 0, got {v}"
                )));
            }
        }
        if self.total() <= 0.0 {
            return Err(FlagError::invalid_configuration(
                "animation cycle must be longer than 0 seconds",
            ));
        }
        Ok(())
    }
}

impl std::str::FromStr for Durations {
    type Err = FlagError;

    /// Parse `"proportional,transition,default"`, e.g. `"10,2,5"`.
    fn from_str(s: &str) -> FlagResult<Self> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| FlagError::invalid_configuration(format!("durations '{s}': {e}")))?;
        let [proportional, transition, default] = parts[..] else {
            return Err(FlagError::invalid_configuration(format!(
                "durations '{s}' must have three comma-separated parts"
            )));
        };
        let d = Self::new(proportional, transition, default);
        d.validate()?;
        Ok(d)
    }
}

/// Where a cycle is at a given moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    HoldProportional,
    TransitionToDefault,
    HoldDefault,
    TransitionToProportional,
}

/// Shared timing for every animated attribute of one document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Schedule {
    total_secs: f64,
    key_times: [f64; 5],
}

impl Schedule {
    /// Number of keyframes per animated attribute.
    pub const KEY_COUNT: usize = 5;

    /// Build the cycle timing from validated durations.
    pub fn new(durations: Durations) -> FlagResult<Self> {
        durations.validate()?;
        let total = durations.total();
        let hold_end = durations.proportional;
        let to_default_end = hold_end + durations.transition;
        let default_end = to_default_end + durations.default;
        Ok(Self {
            total_secs: total,
            key_times: [
                0.0,
                hold_end / total,
                to_default_end / total,
                default_end / total,
                1.0,
            ],
        })
    }

    /// Cycle length in seconds.
    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    /// Keyframe times as fractions of the cycle: `0`, the three phase boundaries, then `1`.
    pub fn key_times(&self) -> &[f64; 5] {
        &self.key_times
    }

    /// Position in the cycle, in `[0, 1)`, after `elapsed_secs`.
    pub fn fraction_at(&self, elapsed_secs: f64) -> f64 {
        elapsed_secs.rem_euclid(self.total_secs) / self.total_secs
    }

    /// Phase of the cycle after `elapsed_secs`; the cycle repeats forever.
    pub fn phase_at(&self, elapsed_secs: f64) -> Phase {
        let f = self.fraction_at(elapsed_secs);
        let [_, hold_end, to_default_end, default_end, _] = self.key_times;
        if f < hold_end {
            Phase::HoldProportional
        } else if f < to_default_end {
            Phase::TransitionToDefault
        } else if f < default_end {
            Phase::HoldDefault
        } else {
            Phase::TransitionToProportional
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
