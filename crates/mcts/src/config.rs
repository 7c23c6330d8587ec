//! Search configuration parameters.
//!
//! These parameters control how long a search session runs and how deep a
//! single descent may go. They can be built in code or read from TOML.

use mcts_core::{MctsError, Result};
use serde::{Deserialize, Serialize};

/// Default depth guard for one descent, in plies.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of exploration iterations run by [`crate::Mcts::run`].
    pub iterations: usize,

    /// Maximum plies a single descent may take before the search gives up.
    /// Finite games never need more than their longest line; `None`
    /// disables the guard.
    pub max_depth: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl SearchConfig {
    /// Create a new config with the specified number of iterations.
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }

    /// Set the descent depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Disable the descent depth limit.
    pub fn unbounded_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Check the parameters for values the search cannot work with.
    ///
    /// # Errors
    /// Returns `MctsError::InvalidConfig` if `max_depth` is zero, which
    /// would reject every non-terminal root.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(MctsError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a config from TOML, filling missing keys with defaults.
    ///
    /// ```
    /// use mcts::SearchConfig;
    ///
    /// let config = SearchConfig::from_toml_str("iterations = 250").unwrap();
    /// assert_eq!(config.iterations, 250);
    /// assert_eq!(config.max_depth, SearchConfig::default().max_depth);
    /// ```
    ///
    /// # Errors
    /// Returns `MctsError::InvalidConfig` if the TOML is malformed or the
    /// parsed values fail [`SearchConfig::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| MctsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
