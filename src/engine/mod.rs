//! Turn orchestration and combat resolution.

#![allow(unused_imports)]

pub mod combat;
pub mod events;
pub mod turn;

pub use combat::*;
pub use events::*;
pub use turn::*;
