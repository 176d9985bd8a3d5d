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

pub mod value;
pub mod statistics;
pub mod profile;

pub use value::{infer_type, is_missing, try_float, ZiCellValue, ZiColumnType, ZiMissingPolicy};
pub use statistics::{
    numeric_stats, summarize_numeric, summarize_text, text_stats, text_stats_default,
    ZiNumericStats, ZiTextStats, ZiTopValue,
};
pub use profile::{profile_csv, ZiColumnProfile, ZiColumnStats, ZiDatasetProfile, ZiProfiler};
