//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi Profile.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Profiler Configuration
//!
//! Tunables for the profiling engine. Every field has a default, so a
//! configuration file only needs to name what it changes:
//!
//! ```yaml
//! top_k: 5
//! missing_tokens: ["", "na", "-"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Tokens that mark a cell as missing once trimmed and lowercased.
pub const DEFAULT_MISSING_TOKENS: [&str; 6] = ["", "na", "n/a", "null", "none", "nan"];

/// Number of most frequent values kept for text columns.
pub const DEFAULT_TOP_K: usize = 3;

/// Decimal places kept for numeric means.
pub const DEFAULT_MEAN_PRECISION: u32 = 2;

// f64 carries roughly 15-17 significant digits.
const MAX_MEAN_PRECISION: u32 = 15;

/// Configuration for [`crate::inspect::ZiProfiler`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiProfilerConfig {
    /// Maximum number of entries in a text column's `top` list.
    pub top_k: usize,
    /// Case-insensitive tokens treated as missing values.
    pub missing_tokens: Vec<String>,
    /// Decimal places the mean is rounded to.
    pub mean_precision: u32,
}

impl Default for ZiProfilerConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            missing_tokens: DEFAULT_MISSING_TOKENS
                .iter()
                .map(|token| token.to_string())
                .collect(),
            mean_precision: DEFAULT_MEAN_PRECISION,
        }
    }
}

impl ZiProfilerConfig {
    /// Sets the number of most frequent text values to keep.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Replaces the missing-value tokens.
    pub fn with_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Loads a configuration from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let content = fs::read_to_string(path)?;

        let config: Self = match ext.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            other => {
                return Err(ZiError::config(format!(
                    "unsupported config format '{}' for {}",
                    other,
                    path.display()
                )))
            }
        };

        log::debug!("loaded profiler config from {}", path.display());
        config.validated()
    }

    /// Normalizes the missing tokens and checks value ranges.
    pub fn validated(mut self) -> Result<Self> {
        if self.mean_precision > MAX_MEAN_PRECISION {
            return Err(ZiError::config(format!(
                "mean_precision must be at most {}, got {}",
                MAX_MEAN_PRECISION, self.mean_precision
            )));
        }

        let mut tokens: Vec<String> = Vec::with_capacity(self.missing_tokens.len());
        for token in &self.missing_tokens {
            let normalized = token.trim().to_lowercase();
            if !tokens.contains(&normalized) {
                tokens.push(normalized);
            }
        }
        self.missing_tokens = tokens;
        Ok(self)
    }
}
