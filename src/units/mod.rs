//! Combatants and the fixed-capacity roster.

#![allow(unused_imports)]

pub mod roster;
pub mod types;

pub use roster::*;
pub use types::*;
