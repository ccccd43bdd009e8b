//! Core module - fundamental types and utilities

pub mod config;
pub mod fraction;
pub mod units;

pub use config::Config;
pub use fraction::{proper_fraction, FractionError, MixedNumber};
pub use units::Resolution;
