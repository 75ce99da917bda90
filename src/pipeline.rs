//! Text → ranked words → theme, end to end.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::frequency::RankedFrequencyList;
use crate::nl::significant_words;
use crate::theme::{classify, theme_config, ThemeConfig, ThemeId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The published result of one run. Replaces the previous output wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutput {
    pub ranked_list: RankedFrequencyList,
    pub theme_id: ThemeId,
    pub theme_config: ThemeConfig,
}

/// Runs the full chain with the default top-K.
pub fn run(raw: &str) -> Result<PipelineOutput> {
    run_with_config(raw, &PipelineConfig::default())
}

/// Runs the full chain from scratch. Nothing is carried over between calls.
///
/// Classification sees the full ranked list; only the published list is truncated.
pub fn run_with_config(raw: &str, config: &PipelineConfig) -> Result<PipelineOutput> {
    let words = significant_words(raw);
    let token_count = words.len();

    let ranked = RankedFrequencyList::from_tokens(words);
    let theme_id = classify(&ranked);
    let theme_config = theme_config(theme_id)?.clone();

    debug!(
        "Pipeline run: {} tokens, {} distinct words, theme '{}'",
        token_count,
        ranked.len(),
        theme_id
    );

    Ok(PipelineOutput {
        ranked_list: ranked.top(config.top_k),
        theme_id,
        theme_config,
    })
}

/// Holds the most recently published output and re-runs the pipeline
/// whenever new text arrives.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    config: PipelineConfig,
    current: Option<PipelineOutput>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Runs on non-empty text and publishes the result.
    ///
    /// Empty text is not a trigger: the current output stays as it was and
    /// `Ok(false)` is returned.
    pub fn submit(&mut self, raw: &str) -> Result<bool> {
        if raw.is_empty() {
            debug!("Empty text submitted, keeping previous output");
            return Ok(false);
        }

        let output = run_with_config(raw, &self.config)?;
        self.current = Some(output);
        Ok(true)
    }

    pub fn current(&self) -> Option<&PipelineOutput> {
        self.current.as_ref()
    }

    /// Theme driving page styling; `default` until the first run.
    pub fn current_theme(&self) -> ThemeId {
        self.current
            .as_ref()
            .map(|output| output.theme_id)
            .unwrap_or_default()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
