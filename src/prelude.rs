pub use crate::eager::{EagerLoad, EagerLoadSelection};
