// Application layer - input parsing, errors and reports sitting between
// the domain ledger and the interactive CLI.

pub mod error;
pub mod input;
pub mod reporting;

pub use error::*;
pub use reporting::*;
