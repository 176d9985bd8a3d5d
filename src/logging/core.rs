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

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::{json, Value};

use crate::errors::{Result, ZiError};
use crate::logging::config::ZiLogConfig;
use crate::logging::formatters::{ZiJsonFormatter, ZiTextFormatter};

/// Owned snapshot of a `log` record.
#[derive(Clone, Debug)]
pub struct ZiLogRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub timestamp: SystemTime,
}

impl ZiLogRecord {
    pub fn from_record(record: &Record<'_>) -> Self {
        ZiLogRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            timestamp: SystemTime::now(),
        }
    }

    pub fn to_json(&self) -> Value {
        let ts = self
            .timestamp
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        json!({
            "level": self.level.as_str(),
            "target": self.target,
            "message": self.message,
            "timestamp_ms": ts,
        })
    }
}

/// `log` backend writing one line per record to stderr.
#[derive(Debug)]
pub struct ZiLogger {
    filter: LevelFilter,
    json: bool,
}

impl ZiLogger {
    pub fn new(config: &ZiLogConfig) -> Result<Self> {
        Ok(ZiLogger {
            filter: config.level_filter()?,
            json: config.json_format,
        })
    }

    /// Installs the logger as the global `log` backend.
    pub fn init(config: &ZiLogConfig) -> Result<()> {
        let logger = Self::new(config)?;
        let filter = logger.filter;
        log::set_boxed_logger(Box::new(logger))
            .map_err(|err| ZiError::config(format!("logger already installed: {}", err)))?;
        log::set_max_level(filter);
        Ok(())
    }

    pub fn format(&self, record: &ZiLogRecord) -> String {
        if self.json {
            ZiJsonFormatter::format(record)
        } else {
            ZiTextFormatter::format(record)
        }
    }
}

impl Log for ZiLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(&ZiLogRecord::from_record(record));
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
