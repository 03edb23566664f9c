mod error;
mod filter;
mod merge;
mod range;
mod resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use error::WindowError;
pub use filter::{filter_passes, ContactLength, PassRequirements};
pub use merge::merge_by_start;
pub use range::{ContactWindow, WindowKind, WindowRules};
pub use resolver::{resolve_contact, PlannedContact};
