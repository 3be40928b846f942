pub mod cli;
pub mod config;
pub mod constants;
pub mod dt;
pub mod error;
pub mod registry;

pub use config::Settings;
pub use dt::context::DtContext;
pub use dt::defines::Definitions;
pub use dt::resolve::{hex_val, int_val};
pub use dt::units::UnitScale;
pub use error::ResolveError;
pub use registry::{FUNCTIONS, KconfigFunction};
