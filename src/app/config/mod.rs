//! Configuration loading from the user's environment.
//!
//! Pure schema parsing lives in `domain::config`.

mod load_config;

pub use load_config::{CONFIG_DIR, CONFIG_FILE, default_config_path, load_config};
