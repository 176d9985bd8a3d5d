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

//! # Markdown Report
//!
//! Layout:
//!
//! ```text
//! # CSV Profiling Report
//! ## Summary            rows / columns
//! ## Column Details     one table row per column
//! ### <column>          per-column statistics
//! ```

use crate::export::json::format_number;
use crate::inspect::{ZiColumnProfile, ZiColumnStats, ZiDatasetProfile};

const TITLE: &str = "# CSV Profiling Report";

/// Renders the profile as a Markdown document.
pub fn to_markdown(profile: &ZiDatasetProfile) -> String {
    let mut lines: Vec<String> = vec![
        TITLE.to_string(),
        String::new(),
        "## Summary".to_string(),
        format!("- **Rows**: {}", profile.n_rows),
        format!("- **Columns**: {}", profile.n_cols),
        String::new(),
        "## Column Details".to_string(),
        String::new(),
        "| Column | Type | Count | Missing | Unique |".to_string(),
        "|--------|------|-------|---------|--------|".to_string(),
    ];

    for column in &profile.columns {
        lines.push(format!(
            "| {} | {} | {} | {} | {} |",
            column.name,
            column.column_type(),
            column.count(),
            column.missing(),
            column.unique()
        ));
    }
    lines.push(String::new());

    for column in &profile.columns {
        push_column_section(&mut lines, column);
    }

    lines.join("\n")
}

fn push_column_section(lines: &mut Vec<String>, column: &ZiColumnProfile) {
    lines.push(format!("### {}", column.name));
    lines.push(String::new());
    lines.push(format!("- **Type**: {}", column.column_type()));
    lines.push(format!("- **Count**: {}", column.count()));
    lines.push(format!("- **Missing**: {}", column.missing()));
    lines.push(format!("- **Unique**: {}", column.unique()));

    match &column.stats {
        ZiColumnStats::Number(stats) => {
            lines.push(format!("- **Min**: {}", or_na(stats.min)));
            lines.push(format!("- **Max**: {}", or_na(stats.max)));
            lines.push(format!("- **Mean**: {}", or_na(stats.mean)));
        }
        ZiColumnStats::Text(stats) => {
            lines.push("- **Top Values**:".to_string());
            if stats.top.is_empty() {
                lines.push("  - None".to_string());
            }
            for entry in &stats.top {
                lines.push(format!("  - {}: {}", entry.value, entry.count));
            }
        }
    }

    lines.push(String::new());
}

fn or_na(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| "N/A".to_string())
}
