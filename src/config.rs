//! Tuning configuration for the analysis pipeline and cloud rendering

use crate::error::{Result, VibeError};
use serde::{Deserialize, Serialize};

// Number of ranked words published per run
pub const TOP_K: usize = 50;

// Word-cloud layout defaults handed to the renderer
pub const GRID_SIZE: u32 = 18;
pub const WEIGHT_SCALE: f64 = 10.0;
pub const ROTATE_RATIO: f64 = 0.5;
pub const ROTATION_STEPS: u32 = 2;

// Canvas size in pixels
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

// Session eviction: idle sessions expire, and the store never holds more than the cap
pub const SESSION_IDLE_TTL_SECS: u64 = 30 * 60;
pub const MAX_SESSIONS: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub top_k: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { top_k: TOP_K }
    }
}

impl PipelineConfig {
    /// Published lists hold between 1 and `TOP_K` words.
    pub fn with_top_k(top_k: usize) -> Result<Self> {
        if top_k == 0 || top_k > TOP_K {
            return Err(VibeError::InvalidTopK {
                value: top_k,
                max: TOP_K,
            });
        }
        Ok(Self { top_k })
    }
}
