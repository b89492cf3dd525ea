use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::contract::{SectionContract, SectionSpec};
use crate::error::{Result, RoadmapError};

/// Default length, in grapheme clusters, of the executive brief excerpt.
pub const DEFAULT_BRIEF_EXCERPT_CHARS: usize = 500;

/// Tunables for roadmap assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Maximum length of the executive brief excerpt
    pub brief_excerpt_chars: usize,

    /// Summary used when the brief is blank. `None` leaves the executive
    /// section empty, which prunes it.
    pub empty_brief_summary: Option<String>,

    /// Replacement section contract (`None` = canonical five sections)
    pub sections: Option<Vec<SectionSpec>>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            brief_excerpt_chars: DEFAULT_BRIEF_EXCERPT_CHARS,
            empty_brief_summary: None,
            sections: None,
        }
    }
}

impl CompilerConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.brief_excerpt_chars == 0 {
            return Err(RoadmapError::invalid_config(
                "brief_excerpt_chars must be > 0",
            ));
        }
        if let Some(sections) = &self.sections {
            SectionContract::new(sections.clone())?;
        }
        Ok(())
    }

    /// Effective section contract for this config.
    pub fn contract(&self) -> Result<SectionContract> {
        match &self.sections {
            Some(sections) => SectionContract::new(sections.clone()),
            None => Ok(SectionContract::canonical().clone()),
        }
    }
}
