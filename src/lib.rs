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

//! # Zi Profile Library
//!
//! Per-column statistical profiling of tabular data, rendered as JSON and
//! Markdown reports.
//!
//! ## Module Overview
//!
//! - **record**: `ZiRow`, an ordered mapping of column name to raw cell
//! - **inspect**: missing-value detection, type inference and column statistics
//! - **export**: JSON/Markdown rendering and report persistence
//! - **ingest**: CSV ingestion (feature `csv`)
//! - **config**: profiler configuration
//! - **logging**: `log` backend used by the `zi-profile` binary
//! - **errors**: error types
//!
//! ## Quick Start
//!
//! ```rust
//! use zi_profile::{profile, to_json, to_markdown, ZiRow, ZiRowExt};
//!
//! let rows = vec![
//!     ZiRow::from_pairs([("a", "1"), ("b", "x")]),
//!     ZiRow::from_pairs([("a", "2"), ("b", "x")]),
//!     ZiRow::from_pairs([("a", ""), ("b", "y")]),
//! ];
//!
//! let report = profile(&rows);
//! assert_eq!(report.n_rows, 3);
//!
//! let json = to_json(&report).unwrap();
//! let markdown = to_markdown(&report);
//! ```
//!
//! ## Error Handling
//!
//! Profiling and Markdown rendering cannot fail. File access, CSV decoding,
//! configuration loading and JSON serialization return `Result<T, ZiError>`.

pub mod config;
pub mod errors;
pub mod export;
#[cfg(feature = "csv")]
pub mod ingest;
pub mod inspect;
pub mod logging;
pub mod record;

pub use config::ZiProfilerConfig;
pub use errors::{Result, ZiError};
pub use export::{from_json, to_json, to_markdown, ZiReportWriter, ZiWriterConfig, ZiWrittenReports};
#[cfg(feature = "csv")]
pub use ingest::{ZiCsvOptions, ZiCsvReader};
pub use inspect::{
    infer_type, is_missing, numeric_stats, profile_csv, text_stats, try_float, ZiCellValue,
    ZiColumnProfile, ZiColumnStats, ZiColumnType, ZiDatasetProfile, ZiNumericStats, ZiProfiler,
    ZiTextStats, ZiTopValue,
};
pub use logging::{ZiLogConfig, ZiLogger};
pub use record::{ZiRow, ZiRowBatch, ZiRowExt};

/// Profiles `rows` with the default configuration.
pub fn profile(rows: &[ZiRow]) -> ZiDatasetProfile {
    profile_csv(rows)
}
