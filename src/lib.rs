mod macros;
mod capacity_error;
mod raw_buf;

pub mod vec_types;

pub use capacity_error::CapacityError;
pub use raw_buf::RawBuf;
pub use vec_types::{DynVec, Iter, IterMut};
