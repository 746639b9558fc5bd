//! # types
//!
//! `types` is the module containing the public records and errors of the crate

pub mod clock_time;
pub mod errors;
pub mod flight;
pub mod row;
