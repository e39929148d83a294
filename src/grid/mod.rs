//! Slot grid, pattern tables, match detection, and spin aggregation.

#![allow(unused_imports)]

pub mod detector;
pub mod patterns;
pub mod result;
pub mod types;

pub use detector::*;
pub use patterns::*;
pub use result::*;
pub use types::*;
