pub(crate) mod keyframes;
pub(crate) mod schedule;
