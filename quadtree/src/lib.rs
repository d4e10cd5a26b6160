// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions,
    clippy::manual_range_contains,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc // TODO remove at some point
)]

mod item;
mod path;
mod quad;
mod search;
mod tree;
mod ops {
    mod contains;
    mod get;
    mod outline;
    mod setup_format;
    mod test_format;

    pub use setup_format::*;
}

pub use crate::tree::*;
pub use item::*;
pub use ops::*;
pub use path::*;
pub use quad::*;
pub use search::*;
