//! An insertion-ordered frequency set backed by [`IndexMap`], along with its
//! iterators.
//!
//! [`IndexMap`]: indexmap::IndexMap

mod into_iter;
mod iter;
mod serialize;
mod set;
mod values;

pub use into_iter::IntoIter;
pub use iter::Iter;
pub use set::FrequencySet;
pub use values::Values;
