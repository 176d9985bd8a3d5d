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

//! # Zi Row Module
//!
//! A row is one record of the dataset: named raw cells in column order.
//!
//! Cells are kept as raw strings. A cell is `None` when the source supplied
//! no value at all (for instance a CSV record shorter than its header), which
//! the profiler treats as missing just like an empty string.
//!
//! ```rust
//! use zi_profile::record::{ZiRow, ZiRowExt};
//!
//! let row = ZiRow::from_pairs([("city", "Riyadh"), ("price", "12.5")]);
//! assert_eq!(row.get("price"), Some(&Some("12.5".to_string())));
//! ```

use indexmap::IndexMap;

/// Insertion-ordered mapping from column name to raw cell value.
///
/// The first row of a batch fixes the column set and its order; later rows
/// lacking a key are read as an empty string for that column.
pub type ZiRow = IndexMap<String, Option<String>>;

/// Convenience alias for working on whole datasets.
pub type ZiRowBatch = Vec<ZiRow>;

/// Construction helpers for [`ZiRow`].
pub trait ZiRowExt {
    /// Builds a row where every cell carries a value.
    fn from_pairs<K, V, I>(pairs: I) -> ZiRow
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>;
}

impl ZiRowExt for ZiRow {
    fn from_pairs<K, V, I>(pairs: I) -> ZiRow
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Some(v.into())))
            .collect()
    }
}
