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

//! # Dataset Profiler
//!
//! Builds a [`ZiDatasetProfile`] from a batch of rows. Columns are taken from
//! the first row; each one is classified, resolved into typed cells and then
//! summarized by the numeric or text statistics pass.

use serde::{Deserialize, Serialize};

use crate::config::ZiProfilerConfig;
use crate::errors::Result;
use crate::inspect::statistics::{summarize_numeric, summarize_text, ZiNumericStats, ZiTextStats};
use crate::inspect::value::{ZiColumnType, ZiMissingPolicy};
use crate::record::ZiRow;

/// Type-specific statistics of a column, tagged by its inferred type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ZiColumnStats {
    Number(ZiNumericStats),
    Text(ZiTextStats),
}

/// Profile of a single column.
///
/// Serializes flat: `name`, `type`, `count`, `missing`, `unique`, then either
/// `min`/`max`/`mean` or `top`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiColumnProfile {
    pub name: String,
    #[serde(flatten)]
    pub stats: ZiColumnStats,
}

impl ZiColumnProfile {
    pub fn column_type(&self) -> ZiColumnType {
        match self.stats {
            ZiColumnStats::Number(_) => ZiColumnType::Number,
            ZiColumnStats::Text(_) => ZiColumnType::Text,
        }
    }

    pub fn count(&self) -> usize {
        match &self.stats {
            ZiColumnStats::Number(stats) => stats.count,
            ZiColumnStats::Text(stats) => stats.count,
        }
    }

    pub fn missing(&self) -> usize {
        match &self.stats {
            ZiColumnStats::Number(stats) => stats.missing,
            ZiColumnStats::Text(stats) => stats.missing,
        }
    }

    pub fn unique(&self) -> usize {
        match &self.stats {
            ZiColumnStats::Number(stats) => stats.unique,
            ZiColumnStats::Text(stats) => stats.unique,
        }
    }

    pub fn numeric(&self) -> Option<&ZiNumericStats> {
        match &self.stats {
            ZiColumnStats::Number(stats) => Some(stats),
            ZiColumnStats::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&ZiTextStats> {
        match &self.stats {
            ZiColumnStats::Text(stats) => Some(stats),
            ZiColumnStats::Number(_) => None,
        }
    }
}

/// Full profiling result for a dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiDatasetProfile {
    pub n_rows: usize,
    pub n_cols: usize,
    pub columns: Vec<ZiColumnProfile>,
}

impl ZiDatasetProfile {
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn column(&self, name: &str) -> Option<&ZiColumnProfile> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// Column profiler driven by a [`ZiProfilerConfig`].
#[derive(Clone, Debug, Default)]
pub struct ZiProfiler {
    config: ZiProfilerConfig,
    policy: ZiMissingPolicy,
}

impl ZiProfiler {
    /// Creates a profiler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a profiler from a configuration, normalizing its tokens.
    pub fn with_config(config: ZiProfilerConfig) -> Result<Self> {
        let config = config.validated()?;
        let policy = ZiMissingPolicy::new(config.missing_tokens.clone());
        Ok(Self { config, policy })
    }

    pub fn config(&self) -> &ZiProfilerConfig {
        &self.config
    }

    /// Profiles `rows`. Never fails; an empty batch yields an empty profile.
    pub fn profile(&self, rows: &[ZiRow]) -> ZiDatasetProfile {
        let Some(first) = rows.first() else {
            log::debug!("profiling empty dataset");
            return ZiDatasetProfile::default();
        };

        let columns: Vec<ZiColumnProfile> = first
            .keys()
            .map(|name| self.profile_column(name, rows))
            .collect();

        log::debug!(
            "profiled {} rows across {} columns",
            rows.len(),
            columns.len()
        );

        ZiDatasetProfile {
            n_rows: rows.len(),
            n_cols: columns.len(),
            columns,
        }
    }

    /// Classifies a column's raw values with this profiler's missing tokens.
    pub fn infer_type(&self, values: &[Option<&str>]) -> ZiColumnType {
        self.policy.infer(values)
    }

    fn profile_column(&self, name: &str, rows: &[ZiRow]) -> ZiColumnProfile {
        let values: Vec<Option<&str>> = rows
            .iter()
            .map(|row| match row.get(name) {
                Some(value) => value.as_deref(),
                None => Some(""),
            })
            .collect();

        let kind = self.policy.infer(&values);
        let cells = self.policy.resolve(&values, kind);

        let stats = match kind {
            ZiColumnType::Number => {
                let stats = summarize_numeric(&cells, self.config.mean_precision);
                let unparsed = values
                    .iter()
                    .zip(&cells)
                    .filter(|(raw, cell)| cell.is_missing() && !self.policy.is_missing(**raw))
                    .count();
                if unparsed > 0 {
                    log::warn!(
                        "column '{}' typed number but {} value(s) failed to parse",
                        name,
                        unparsed
                    );
                }
                ZiColumnStats::Number(stats)
            }
            ZiColumnType::Text => ZiColumnStats::Text(summarize_text(&cells, self.config.top_k)),
        };

        log::trace!("column '{}' inferred as {}", name, kind);

        ZiColumnProfile {
            name: name.to_string(),
            stats,
        }
    }
}

/// Profiles rows with the default configuration.
pub fn profile_csv(rows: &[ZiRow]) -> ZiDatasetProfile {
    ZiProfiler::new().profile(rows)
}
