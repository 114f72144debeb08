//! Systems - logic that advances or reshapes airline state

mod ledger;
pub mod network;
mod operations;

pub use ledger::*;
pub use operations::*;
