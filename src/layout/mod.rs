//! Static geometry: stripes, stars, canton.

pub(crate) mod canton;
pub(crate) mod stars;
pub(crate) mod stripes;
