//! Theme selection and the static theme table.

use crate::error::{Result, VibeError};
use crate::frequency::RankedFrequencyList;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Haunted,
    #[default]
    Default,
}

impl ThemeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Haunted => "haunted",
            ThemeId::Default => "default",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = VibeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "haunted" => Ok(ThemeId::Haunted),
            "default" => Ok(ThemeId::Default),
            other => Err(VibeError::UnknownTheme(other.to_string())),
        }
    }
}

/// Visual attributes shared by the page and the cloud canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub font_family: String,
    pub color: String,
    pub background_color: String,
}

struct ThemeRule {
    theme: ThemeId,
    keywords: HashSet<&'static str>,
}

static THEMES: OnceLock<IndexMap<ThemeId, ThemeConfig>> = OnceLock::new();
static RULES: OnceLock<Vec<ThemeRule>> = OnceLock::new();

fn get_themes() -> &'static IndexMap<ThemeId, ThemeConfig> {
    THEMES.get_or_init(|| {
        let mut themes = IndexMap::new();
        themes.insert(
            ThemeId::Haunted,
            ThemeConfig {
                font_family: "'Creepster', cursive".to_string(),
                color: "rgba(150, 0, 0, 0.8)".to_string(),
                background_color: "#2e2e2e".to_string(),
            },
        );
        themes.insert(
            ThemeId::Default,
            ThemeConfig {
                font_family: "Arial, sans-serif".to_string(),
                color: "rgba(0, 0, 0, 0.8)".to_string(),
                background_color: "#ffffff".to_string(),
            },
        );
        themes
    })
}

// Rules are checked in table order for each ranked word.
fn get_rules() -> &'static [ThemeRule] {
    RULES.get_or_init(|| {
        vec![ThemeRule {
            theme: ThemeId::Haunted,
            keywords: ["haunted", "ghost", "spooky", "phantom"].into_iter().collect(),
        }]
    })
}

/// Walks the ranked list from the top and returns the theme of the first
/// word that matches any rule's keywords. Counts are ignored.
pub fn classify(ranked: &RankedFrequencyList) -> ThemeId {
    let rules = get_rules();
    for entry in ranked {
        if let Some(rule) = rules
            .iter()
            .find(|rule| rule.keywords.contains(entry.word.as_str()))
        {
            return rule.theme;
        }
    }
    ThemeId::Default
}

pub fn theme_config(id: ThemeId) -> Result<&'static ThemeConfig> {
    get_themes().get(&id).ok_or_else(|| {
        error!("Theme registry has no entry for '{}'", id);
        VibeError::UnknownTheme(id.to_string())
    })
}

/// Looks a theme up by its string id.
pub fn lookup(name: &str) -> Result<&'static ThemeConfig> {
    let id = name.parse::<ThemeId>().inspect_err(|e| {
        error!("Theme lookup failed: {}", e);
    })?;
    theme_config(id)
}

/// All registered themes in table order.
pub fn registered() -> impl Iterator<Item = (ThemeId, &'static ThemeConfig)> {
    get_themes().iter().map(|(id, config)| (*id, config))
}
