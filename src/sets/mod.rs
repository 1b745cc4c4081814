//! Small numeric and set primitives used by the rules.
//!
//! - `sum`: total of a sequence of tile or die values
//! - `powerset`: every non-empty subset of a tile sequence
//! - `difference`: elements of one set missing from another

mod difference;
mod powerset;
mod sum;

pub use difference::difference;
pub use powerset::powerset;
pub use sum::sum;
