//! Configuration: TOML file under the user config dir, with defaults
//! when the file is absent.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults};
