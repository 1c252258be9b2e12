// src/config.rs

use crate::types::MenuAimConfig;
use anyhow::Result;
use std::fs;

impl MenuAimConfig {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: MenuAimConfig = serde_yaml::from_str(&contents)?;
        Ok(config.validated())
    }

    /// Clamp degenerate values instead of erroring. The decision policy is
    /// total, so a misconfigured instance still runs; it just activates
    /// rows immediately.
    pub fn validated(mut self) -> Self {
        if self.sample_count == 0 {
            self.sample_count = 1;
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            self.tolerance = 0.0;
        }
        self
    }
}
