pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, EngineConfig};
pub use error::{GridError, Result};
pub use types::{BoardVersion, PlayerId, TeamId};
