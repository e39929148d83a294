//! Core configuration and tuning values.

#![allow(unused_imports)]

pub mod config;
pub mod constants;

pub use config::*;
pub use constants::*;
