pub mod domain;
pub mod units;
