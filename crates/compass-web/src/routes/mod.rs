//! Route handlers.

pub mod frontend;
pub mod keywords;
pub mod meta;
pub mod niches;
pub mod products;
pub mod profit;
