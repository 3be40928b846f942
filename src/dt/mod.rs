pub mod context;
pub mod defines;
pub mod resolve;
pub mod units;
