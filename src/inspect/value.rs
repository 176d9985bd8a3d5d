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

//! # Cell Values and Missing-Value Policy
//!
//! Raw cells arrive as optional strings. Before any statistic is computed a
//! column is classified once and every cell is resolved into a
//! [`ZiCellValue`], so the statistics passes never parse or re-check the
//! missing-value tokens themselves.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MISSING_TOKENS;

/// Inferred type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiColumnType {
    /// Every non-missing value parses as a float.
    Number,
    /// Anything else, including columns with no values at all.
    Text,
}

impl ZiColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZiColumnType::Number => "number",
            ZiColumnType::Text => "text",
        }
    }
}

impl std::fmt::Display for ZiColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell resolved against its column's inferred type.
#[derive(Clone, Debug, PartialEq)]
pub enum ZiCellValue {
    /// Parsed value of a numeric column.
    Number(f64),
    /// Trimmed value of a text column.
    Text(String),
    /// Absent, a missing token, or unparsable in a numeric column.
    Missing,
}

impl ZiCellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, ZiCellValue::Missing)
    }
}

/// Returns `true` when `value` is absent or one of the default missing tokens.
///
/// The comparison is made on the trimmed, lowercased value, so `" N/A "` and
/// `"None"` are both missing.
pub fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(raw) => {
            let folded = raw.trim().to_lowercase();
            DEFAULT_MISSING_TOKENS.contains(&folded.as_str())
        }
    }
}

/// Parses a raw cell as a float.
///
/// Surrounding whitespace is ignored; signs, decimal and scientific notation
/// are accepted.
pub fn try_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Missing-value gate applied before inference and statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiMissingPolicy {
    tokens: Vec<String>,
}

impl Default for ZiMissingPolicy {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_MISSING_TOKENS
                .iter()
                .map(|token| token.to_string())
                .collect(),
        }
    }
}

impl ZiMissingPolicy {
    /// Builds a policy from tokens that are already trimmed and lowercased.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_missing(&self, value: Option<&str>) -> bool {
        match value {
            None => true,
            Some(raw) => {
                let folded = raw.trim().to_lowercase();
                self.tokens.iter().any(|token| *token == folded)
            }
        }
    }

    /// Classifies a whole column; a single unparsable value makes it text.
    pub fn infer(&self, values: &[Option<&str>]) -> ZiColumnType {
        let mut present = values
            .iter()
            .copied()
            .filter(|value| !self.is_missing(*value))
            .flatten()
            .peekable();

        if present.peek().is_none() {
            return ZiColumnType::Text;
        }

        if present.all(|value| try_float(value).is_some()) {
            ZiColumnType::Number
        } else {
            ZiColumnType::Text
        }
    }

    /// Resolves raw cells against `kind`.
    pub fn resolve(&self, values: &[Option<&str>], kind: ZiColumnType) -> Vec<ZiCellValue> {
        values
            .iter()
            .map(|value| match *value {
                Some(raw) if !self.is_missing(Some(raw)) => match kind {
                    ZiColumnType::Number => try_float(raw)
                        .map(ZiCellValue::Number)
                        .unwrap_or(ZiCellValue::Missing),
                    ZiColumnType::Text => ZiCellValue::Text(raw.trim().to_string()),
                },
                _ => ZiCellValue::Missing,
            })
            .collect()
    }
}

/// Classifies a column with the default missing tokens.
pub fn infer_type(values: &[Option<&str>]) -> ZiColumnType {
    ZiMissingPolicy::default().infer(values)
}
