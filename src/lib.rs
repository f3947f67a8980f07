//! Append/remove microbenchmark workload.
//!
//! The binary reads one count, pushes `0..n` onto an empty `Vec` and then
//! pops it back to empty. Timing is left to whatever harness runs it.

pub mod churn;
pub mod cli;
pub mod count;
pub mod error;

pub use churn::{churn, grow, shrink, ChurnReport};
pub use count::{parse_count, Plan};
pub use error::{Error, Result};
