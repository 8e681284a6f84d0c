mod branch;
mod io;
mod kernel;
mod ops;
mod stack;
mod stdlib;

pub use crate::branch::branch;
pub use crate::io::io;
pub use crate::kernel::kernel;
pub use crate::ops::ops;
pub use crate::stack::stack;
pub use crate::stdlib::{stdlib, PRELUDE};
