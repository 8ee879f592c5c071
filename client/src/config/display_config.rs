use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_coordinates: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_coordinates: true,
        }
    }
}
