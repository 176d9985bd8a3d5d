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

//! # Report Writer Module
//!
//! Persists the JSON and Markdown reports of a profile into an output
//! directory as `<name>.json` and `<name>.md`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::export::json::to_json;
use crate::export::markdown::to_markdown;
use crate::inspect::ZiDatasetProfile;

/// Configuration for the report writer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZiWriterConfig {
    /// Directory receiving the reports; created when absent.
    pub output_dir: PathBuf,
    /// File stem shared by both reports.
    pub name: String,
    /// Use atomic write (write to temp then rename).
    pub atomic_write: bool,
}

impl Default for ZiWriterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            name: "report".to_string(),
            atomic_write: true,
        }
    }
}

/// Paths of the reports written by [`ZiReportWriter::write`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiWrittenReports {
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
}

/// Writes rendered profile reports to disk.
#[derive(Clone, Debug, Default)]
pub struct ZiReportWriter {
    config: ZiWriterConfig,
}

impl ZiReportWriter {
    /// Creates a writer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the writer configuration.
    pub fn with_config(mut self, config: ZiWriterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ZiWriterConfig {
        &self.config
    }

    /// Renders both reports, then writes them.
    ///
    /// Rendering happens before any file is touched, so a serialization
    /// failure leaves the output directory unchanged.
    pub fn write(&self, profile: &ZiDatasetProfile) -> Result<ZiWrittenReports> {
        let name = self.config.name.trim();
        if name.is_empty() || name.contains(&['/', '\\'][..]) {
            return Err(ZiError::validation(format!(
                "invalid report name '{}'",
                self.config.name
            )));
        }

        let json = to_json(profile)?;
        let markdown = to_markdown(profile);

        fs::create_dir_all(&self.config.output_dir)?;
        let reports = ZiWrittenReports {
            json_path: self.config.output_dir.join(format!("{name}.json")),
            markdown_path: self.config.output_dir.join(format!("{name}.md")),
        };

        self.write_file(&reports.json_path, &json)?;
        self.write_file(&reports.markdown_path, &markdown)?;

        log::info!(
            "wrote reports {} and {}",
            reports.json_path.display(),
            reports.markdown_path.display()
        );
        Ok(reports)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if self.config.atomic_write {
            let temp_path = Self::temp_path(path);
            Self::write_contents(&temp_path, content)?;
            if let Err(err) = fs::rename(&temp_path, path) {
                let _ = fs::remove_file(&temp_path);
                return Err(err.into());
            }
            Ok(())
        } else {
            Self::write_contents(path, content)
        }
    }

    fn write_contents(path: &Path, content: &str) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Generates temporary path for atomic writes.
    fn temp_path(path: &Path) -> PathBuf {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("report");
        let parent = path.parent().unwrap_or(Path::new("."));
        parent.join(format!(".{}.tmp", file_name))
    }
}
