//! Word-cloud renderer input and page styling derived from a pipeline run.
//!
//! Layout itself belongs to the rendering engine. This module only packages
//! the word list with the fixed layout parameters and the theme's colors.

use crate::config::*;
use crate::error::Result;
use crate::pipeline::PipelineOutput;
use crate::theme::{theme_config, ThemeConfig, ThemeId};
use serde::{Deserialize, Serialize};

/// Square-root scaling of a word's weight into a font size.
pub fn weight_to_size(weight: u32) -> f64 {
    (weight as f64).sqrt() * WEIGHT_SCALE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudWord {
    pub text: String,
    pub weight: u32,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSpec {
    pub list: Vec<CloudWord>,
    pub font_family: String,
    pub color: String,
    pub background_color: String,
    pub grid_size: u32,
    pub weight_factor: f64,
    pub rotate_ratio: f64,
    pub rotation_steps: u32,
    pub width: u32,
    pub height: u32,
}

impl CloudSpec {
    pub fn from_output(output: &PipelineOutput) -> Self {
        let list = output
            .ranked_list
            .iter()
            .map(|entry| CloudWord {
                text: entry.word.clone(),
                weight: entry.count,
                size: weight_to_size(entry.count),
            })
            .collect();

        Self {
            list,
            font_family: output.theme_config.font_family.clone(),
            color: output.theme_config.color.clone(),
            background_color: output.theme_config.background_color.clone(),
            grid_size: GRID_SIZE,
            weight_factor: WEIGHT_SCALE,
            rotate_ratio: ROTATE_RATIO,
            rotation_steps: ROTATION_STEPS,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// Ambient page styling outside the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub font_family: String,
    pub color: String,
    pub background_color: String,
}

impl PageStyle {
    pub fn for_theme(id: ThemeId) -> Result<Self> {
        Ok(Self::from(theme_config(id)?))
    }
}

impl From<&ThemeConfig> for PageStyle {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            font_family: config.font_family.clone(),
            color: config.color.clone(),
            background_color: config.background_color.clone(),
        }
    }
}

/// Everything a front end needs to draw one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendering {
    pub output: PipelineOutput,
    pub cloud: CloudSpec,
    pub page: PageStyle,
}

impl Rendering {
    pub fn new(output: PipelineOutput) -> Self {
        let cloud = CloudSpec::from_output(&output);
        let page = PageStyle::from(&output.theme_config);
        Self {
            output,
            cloud,
            page,
        }
    }
}
