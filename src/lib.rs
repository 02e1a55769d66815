mod eager;
mod prelude;

pub use crate::prelude::*;
