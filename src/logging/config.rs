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

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Configuration for [`super::ZiLogger`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiLogConfig {
    /// Minimum level: `trace`, `debug`, `info`, `warn`/`warning`, `error`
    /// or `off`, case-insensitive.
    pub level: String,
    /// Emit one JSON object per line instead of plain text.
    pub json_format: bool,
}

impl Default for ZiLogConfig {
    fn default() -> Self {
        ZiLogConfig {
            level: "INFO".to_string(),
            json_format: false,
        }
    }
}

impl ZiLogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(LevelFilter::Off),
            "error" => Ok(LevelFilter::Error),
            "warn" | "warning" => Ok(LevelFilter::Warn),
            "info" => Ok(LevelFilter::Info),
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            other => Err(ZiError::config(format!("unknown log level '{}'", other))),
        }
    }
}
