//! Niche Compass Core Library
//!
//! Domain models and the analysis engine for the Niche Compass
//! market research API.

pub mod error;
pub mod estimate;
pub mod market;
pub mod product;
pub mod profit;

pub use error::{CompassError, CompassResult};
