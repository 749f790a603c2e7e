//! Region weights and the fixed orderings that place regions on the flag.

pub(crate) mod datasets;
pub(crate) mod table;
