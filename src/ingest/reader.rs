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

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::errors::Result;
use crate::record::{ZiRow, ZiRowBatch};

/// Configuration for CSV ingestion.
#[derive(Clone, Debug)]
pub struct ZiCsvOptions {
    pub delimiter: u8,
    /// Strip surrounding whitespace from header names.
    pub trim_headers: bool,
}

impl Default for ZiCsvOptions {
    fn default() -> Self {
        ZiCsvOptions {
            delimiter: b',',
            trim_headers: false,
        }
    }
}

/// Reads CSV data with a header row into [`ZiRow`]s.
///
/// Records shorter than the header leave their trailing cells as `None`;
/// fields beyond the header are dropped.
#[derive(Clone, Debug, Default)]
pub struct ZiCsvReader {
    options: ZiCsvOptions,
}

impl ZiCsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ZiCsvOptions) -> Self {
        self.options = options;
        self
    }

    /// Loads every row of the file at `path`.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<ZiRowBatch> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let rows = self.read_reader(file)?;
        log::debug!("loaded {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// Loads every row from an in-memory CSV document.
    pub fn read_str(&self, content: &str) -> Result<ZiRowBatch> {
        self.read_reader(content.as_bytes())
    }

    /// Loads every row from any reader yielding UTF-8 CSV content.
    pub fn read_reader<R: Read>(&self, reader: R) -> Result<ZiRowBatch> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(if self.options.trim_headers {
                Trim::Headers
            } else {
                Trim::None
            })
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mut batch = Vec::new();
        let mut record = StringRecord::new();

        while reader.read_record(&mut record)? {
            batch.push(Self::record_to_row(&headers, &record));
        }

        Ok(batch)
    }

    fn record_to_row(headers: &StringRecord, record: &StringRecord) -> ZiRow {
        let mut row = ZiRow::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            row.insert(name.to_string(), record.get(idx).map(str::to_string));
        }
        row
    }
}
