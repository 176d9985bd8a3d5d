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

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MEAN_PRECISION, DEFAULT_TOP_K};
use crate::inspect::value::{ZiCellValue, ZiColumnType, ZiMissingPolicy};

/// Statistics of a numeric column.
///
/// `min`, `max` and `mean` are `None` when the column holds no parsable value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiNumericStats {
    pub count: usize,
    pub missing: usize,
    pub unique: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

/// One entry of a text column's frequency ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiTopValue {
    pub value: String,
    pub count: usize,
}

/// Statistics of a text column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiTextStats {
    pub count: usize,
    pub missing: usize,
    pub unique: usize,
    pub top: Vec<ZiTopValue>,
}

/// Computes numeric statistics over resolved cells.
///
/// Only `Number` cells are counted; every other cell counts as missing.
pub fn summarize_numeric(cells: &[ZiCellValue], mean_precision: u32) -> ZiNumericStats {
    let numbers: Vec<f64> = cells
        .iter()
        .filter_map(|cell| match cell {
            ZiCellValue::Number(n) => Some(*n),
            _ => None,
        })
        .collect();

    let count = numbers.len();
    let missing = cells.len() - count;

    if numbers.is_empty() {
        return ZiNumericStats {
            count,
            missing,
            ..ZiNumericStats::default()
        };
    }

    let unique = numbers
        .iter()
        .map(|n| float_key(*n))
        .collect::<HashSet<_>>()
        .len();
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = mean_of(&numbers);

    ZiNumericStats {
        count,
        missing,
        unique,
        min: Some(min),
        max: Some(max),
        mean: Some(round_to(mean, mean_precision)),
    }
}

/// Computes text statistics over resolved cells, keeping at most `top_k`
/// values ranked by descending frequency. Ties keep first-appearance order.
pub fn summarize_text(cells: &[ZiCellValue], top_k: usize) -> ZiTextStats {
    let mut frequencies: IndexMap<&str, usize> = IndexMap::new();
    for cell in cells {
        if let ZiCellValue::Text(text) = cell {
            *frequencies.entry(text.as_str()).or_insert(0) += 1;
        }
    }

    let count: usize = frequencies.values().sum();
    let missing = cells.len() - count;
    let unique = frequencies.len();

    let mut ranked: Vec<(&str, usize)> = frequencies.into_iter().collect();
    // sort_by is stable, so equal counts stay in first-appearance order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_k);

    ZiTextStats {
        count,
        missing,
        unique,
        top: ranked
            .into_iter()
            .map(|(value, count)| ZiTopValue {
                value: value.to_string(),
                count,
            })
            .collect(),
    }
}

/// Numeric statistics of raw values using the default missing tokens.
///
/// Unparsable values are tolerated and reported as missing.
pub fn numeric_stats(values: &[Option<&str>]) -> ZiNumericStats {
    let cells = ZiMissingPolicy::default().resolve(values, ZiColumnType::Number);
    summarize_numeric(&cells, DEFAULT_MEAN_PRECISION)
}

/// Text statistics of raw values using the default missing tokens.
pub fn text_stats(values: &[Option<&str>], top_k: usize) -> ZiTextStats {
    let cells = ZiMissingPolicy::default().resolve(values, ZiColumnType::Text);
    summarize_text(&cells, top_k)
}

/// [`text_stats`] with the default `top_k` of 3.
pub fn text_stats_default(values: &[Option<&str>]) -> ZiTextStats {
    text_stats(values, DEFAULT_TOP_K)
}

/// Rounds half-to-even on the exact binary value, the way decimal
/// formatting does.
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", precision as usize, value)
        .parse()
        .unwrap_or(value)
}

// Falls back to pre-scaled terms when the plain sum overflows.
fn mean_of(numbers: &[f64]) -> f64 {
    let n = numbers.len() as f64;
    let sum: f64 = numbers.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        numbers.iter().map(|value| value / n).sum()
    }
}

// -0.0 and 0.0 compare equal and must count once.
fn float_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
