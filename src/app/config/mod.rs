//! Configuration discovery and loading.
//!
//! Pure schema parsing lives in `domain::configuration`.

mod load_config;

pub use load_config::{CONFIG_ENV, ConfigLocation, load_config, resolve_config_path};
