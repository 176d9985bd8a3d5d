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

//! # Zi Profile Tests - Profiling Engine
//!
//! ## Test Categories
//!
//! - **Profile Tests**: whole-dataset profiles of small fixtures
//! - **Inference Tests**: numeric vs text classification
//! - **Statistics Tests**: numeric and text column statistics
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test profile
//! ```

use zi_profile::{
    infer_type, numeric_stats, profile, text_stats, ZiColumnStats, ZiColumnType, ZiProfiler,
    ZiProfilerConfig, ZiRow, ZiRowExt,
};

fn example_rows() -> Vec<ZiRow> {
    vec![
        ZiRow::from_pairs([("a", "1"), ("b", "x")]),
        ZiRow::from_pairs([("a", "2"), ("b", "x")]),
        ZiRow::from_pairs([("a", ""), ("b", "y")]),
    ]
}

/// Tests the reference three-row example end to end.
#[test]
fn test_profile_reference_example() {
    let report = profile(&example_rows());
    assert_eq!(report.n_rows, 3);
    assert_eq!(report.n_cols, 2);

    let a = &report.columns[0];
    assert_eq!(a.name, "a");
    match &a.stats {
        ZiColumnStats::Number(stats) => {
            assert_eq!(stats.count, 2);
            assert_eq!(stats.missing, 1);
            assert_eq!(stats.unique, 2);
            assert_eq!(stats.min, Some(1.0));
            assert_eq!(stats.max, Some(2.0));
            assert_eq!(stats.mean, Some(1.5));
        }
        other => panic!("expected numeric stats, got {:?}", other),
    }

    let b = &report.columns[1];
    assert_eq!(b.name, "b");
    match &b.stats {
        ZiColumnStats::Text(stats) => {
            assert_eq!(stats.count, 3);
            assert_eq!(stats.missing, 0);
            assert_eq!(stats.unique, 2);
            let top: Vec<(&str, usize)> = stats
                .top
                .iter()
                .map(|entry| (entry.value.as_str(), entry.count))
                .collect();
            assert_eq!(top, vec![("x", 2), ("y", 1)]);
        }
        other => panic!("expected text stats, got {:?}", other),
    }
}

/// Tests that an empty row list yields the zero-valued profile.
#[test]
fn test_profile_empty_dataset() {
    let report = profile(&[]);
    assert_eq!(report.n_rows, 0);
    assert_eq!(report.n_cols, 0);
    assert!(report.columns.is_empty());
}

/// Tests a column made only of missing tokens and absent cells.
#[test]
fn test_profile_fully_missing_column() {
    let mut absent = ZiRow::new();
    absent.insert("m".into(), None);
    let rows = vec![
        ZiRow::from_pairs([("m", "NA")]),
        ZiRow::from_pairs([("m", "n/a")]),
        ZiRow::from_pairs([("m", "")]),
        absent,
    ];

    let report = profile(&rows);
    let column = &report.columns[0];
    assert_eq!(column.column_type(), ZiColumnType::Text);
    assert_eq!(column.count(), 0);
    assert_eq!(column.missing(), 4);
    assert_eq!(column.unique(), 0);
    assert!(column.text().expect("text stats").top.is_empty());
}

/// Tests that column order follows the first row, not later rows.
#[test]
fn test_profile_column_order_from_first_row() {
    let rows = vec![
        ZiRow::from_pairs([("zeta", "1"), ("alpha", "2")]),
        ZiRow::from_pairs([("alpha", "3"), ("zeta", "4"), ("extra", "5")]),
    ];
    let report = profile(&rows);
    let names: Vec<&str> = report.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
}

/// Tests numeric inference over signs, exponents and padding.
#[test]
fn test_infer_number_for_numeric_notations() {
    let values = [Some(" 1 "), Some("-2.5"), Some("+3e2"), Some("4E-1"), Some(".5"), Some("N/A")];
    assert_eq!(infer_type(&values), ZiColumnType::Number);
}

/// Tests that one non-numeric value flips the whole column to text.
#[test]
fn test_infer_single_text_value_flips_column() {
    let values = [Some("1"), Some("2"), Some("three"), Some("4")];
    assert_eq!(infer_type(&values), ZiColumnType::Text);

    let rows: Vec<ZiRow> = values
        .iter()
        .map(|v| ZiRow::from_pairs([("n", v.unwrap_or_default())]))
        .collect();
    let report = profile(&rows);
    let column = &report.columns[0];
    assert_eq!(column.column_type(), ZiColumnType::Text);
    assert_eq!(column.count(), 4);
    assert_eq!(column.unique(), 4);
}

/// Tests that numeric uniqueness compares parsed values.
#[test]
fn test_numeric_unique_by_value() {
    let stats = numeric_stats(&[Some("1"), Some("1.0"), Some("1e0"), Some("2")]);
    assert_eq!(stats.count, 4);
    assert_eq!(stats.unique, 2);
    assert_eq!(stats.mean, Some(1.25));
}

/// Tests that text uniqueness compares trimmed strings.
#[test]
fn test_text_unique_by_trimmed_value() {
    let stats = text_stats(&[Some("a"), Some(" a"), Some("a "), Some("A")], 3);
    assert_eq!(stats.unique, 2);
    assert_eq!(stats.top[0].value, "a");
    assert_eq!(stats.top[0].count, 3);
}

/// Tests that a configured profiler applies its own top_k and precision.
#[test]
fn test_profiler_with_custom_config() {
    let config = ZiProfilerConfig {
        top_k: 1,
        mean_precision: 1,
        ..ZiProfilerConfig::default()
    };
    let profiler = ZiProfiler::with_config(config).expect("valid config");

    let rows = vec![
        ZiRow::from_pairs([("n", "1"), ("t", "p")]),
        ZiRow::from_pairs([("n", "1"), ("t", "q")]),
        ZiRow::from_pairs([("n", "2"), ("t", "q")]),
    ];
    let report = profiler.profile(&rows);
    assert_eq!(report.columns[0].numeric().expect("numeric").mean, Some(1.3));
    let top = &report.columns[1].text().expect("text").top;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].value, "q");
}
