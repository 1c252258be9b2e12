// src/types.rs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A pointer sample in page coordinates. The y axis grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the menu container. Read fresh from the host on every
/// policy evaluation, never cached, since layout can change between events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl MenuBounds {
    pub const ZERO: MenuBounds = MenuBounds {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Side on which the submenu opens relative to the main menu. Selects
/// which pair of bounding-box corners the slope test watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmenuDirection {
    Left,
    Right,
    Above,
    Below,
}

impl Default for SubmenuDirection {
    fn default() -> Self {
        SubmenuDirection::Right
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuAimConfig {
    /// Cone margin in px. Bigger = more forgiving when entering the submenu
    pub tolerance: f64,
    /// Wait in ms before re-checking when the pointer appears to be
    /// heading into the submenu
    pub delay_ms: u64,
    /// Number of past pointer locations to track
    pub sample_count: usize,
    /// Direction the submenu opens relative to the main menu
    pub direction: SubmenuDirection,
}

impl Default for MenuAimConfig {
    fn default() -> Self {
        Self {
            tolerance: 75.0,
            delay_ms: 300,
            sample_count: 3,
            direction: SubmenuDirection::Right,
        }
    }
}

impl MenuAimConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
