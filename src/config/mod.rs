pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Apply the capture-block flag to the window at startup, before the
    /// first frame is composited.
    pub protect_on_launch: bool,
    pub window_size: (f64, f64),
    pub window_position: (f64, f64),
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // The OS default for a fresh window is "capturable"; protecting
            // from the first frame is an explicit opt-in.
            protect_on_launch: false,
            window_size: (1000.0, 700.0),
            window_position: (100.0, 100.0),
        }
    }
}
