mod dyn_vec;
mod iter;

pub use dyn_vec::DynVec;
pub use iter::{Iter, IterMut};
