//! Run outcome types and helpers.

mod outcome;

pub use outcome::RunOutcome;
