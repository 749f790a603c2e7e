//! Flag description in, fully resolved (optionally animated) element geometry out.

pub(crate) mod model;
pub(crate) mod resolve;
pub(crate) mod variants;
