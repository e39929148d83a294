//! Stacked, timed status effects.

#![allow(unused_imports)]

pub mod ledger;
pub mod types;

pub use ledger::*;
pub use types::*;
