pub mod config;
pub mod constants;
pub mod error;
pub mod results;
pub mod types;

pub use config::EngineConfig;
pub use constants::*;
pub use error::MintburnError;
pub use results::*;
pub use types::*;
