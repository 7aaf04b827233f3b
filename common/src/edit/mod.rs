//! Copy-on-write edit operations over the form schemas.
//!
//! Every operation takes an immutable schema and returns a new value; the
//! input is never mutated and no mutable alias of owned state escapes to
//! callers. Operations never fail: out-of-range indices are no-ops that
//! return an unchanged copy, so UI code can fire them without guards.

pub mod flat;
pub mod grouping;
pub mod hierarchical;
