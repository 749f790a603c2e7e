use crate::animation::schedule::Schedule;
use crate::foundation::core::{Size, Vec2};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Size {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Size::new(
            a.width + (b.width - a.width) * t,
            a.height + (b.height - a.height) * t,
        )
    }
}

/// The five values of one animated attribute: `[p, p, d, d, p]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Keyframes<T> {
    values: [T; Schedule::KEY_COUNT],
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Hold `proportional`, move to `default`, hold it, move back.
    pub fn cycle(proportional: T, default: T) -> Self {
        Self {
            values: [
                proportional.clone(),
                proportional.clone(),
                default.clone(),
                default,
                proportional,
            ],
        }
    }

    /// Values aligned with [`Schedule::key_times`].
    pub fn values(&self) -> &[T; Schedule::KEY_COUNT] {
        &self.values
    }

    pub fn proportional(&self) -> &T {
        &self.values[0]
    }

    pub fn default_value(&self) -> &T {
        &self.values[2]
    }

    /// Linear value at cycle fraction `fraction` (clamped to `[0, 1]`).
    pub fn sample(&self, schedule: &Schedule, fraction: f64) -> T {
        let times = schedule.key_times();
        let f = fraction.clamp(0.0, 1.0);
        let idx = times.partition_point(|&k| k <= f);

        if idx == 0 {
            return self.values[0].clone();
        }
        if idx >= times.len() {
            return self.values[times.len() - 1].clone();
        }

        let (ta, tb) = (times[idx - 1], times[idx]);
        let a = &self.values[idx - 1];
        let b = &self.values[idx];
        let denom = tb - ta;
        if denom <= 0.0 {
            return a.clone();
        }
        T::lerp(a, b, (f - ta) / denom)
    }
}

/// An attribute that is either fixed or runs the shared keyframe cycle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Track<T> {
    Static(T),
    Animated(Keyframes<T>),
}

impl<T> Track<T>
where
    T: Lerp + Clone + PartialEq,
{
    /// Track that always runs the cycle, even when both ends agree.
    pub fn animated(proportional: T, default: T) -> Self {
        Self::Animated(Keyframes::cycle(proportional, default))
    }

    /// Animated track, or a static one when both ends agree.
    pub fn between(proportional: T, default: T) -> Self {
        if proportional == default {
            Self::Static(proportional)
        } else {
            Self::Animated(Keyframes::cycle(proportional, default))
        }
    }

    /// Value shown before any animation runs (the proportional value).
    pub fn initial(&self) -> &T {
        match self {
            Self::Static(v) => v,
            Self::Animated(kf) => kf.proportional(),
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated(_))
    }

    /// Value at cycle fraction `fraction`.
    pub fn sample(&self, schedule: &Schedule, fraction: f64) -> T {
        match self {
            Self::Static(v) => v.clone(),
            Self::Animated(kf) => kf.sample(schedule, fraction),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
