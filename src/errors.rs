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

//! # Zi Profile Error Module
//!
//! Error types shared by the ingestion, configuration and export layers.
//!
//! The profiling engine itself never fails: malformed cells are counted as
//! missing and an empty dataset yields an all-zero profile. Errors only arise
//! at the edges, when reading files, parsing configuration or serializing
//! reports.
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors
//! - **Csv**: Malformed CSV input
//! - **Serde**: JSON/YAML serialization and deserialization errors
//! - **Config**: Invalid profiler or logger configuration
//! - **Validation**: Invalid parameters passed to a public API
//! - **Internal**: Unexpected internal failures

use std::io;

use thiserror::Error;

/// Convenience result type used throughout Zi Profile.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi Profile.
#[derive(Debug, Error)]
pub enum ZiError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Errors raised while decoding CSV input.
    #[error("csv error: {0}")]
    Csv(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Invalid configuration values or unreadable configuration files.
    #[error("config error: {message}")]
    Config { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for ZiError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            if let csv::ErrorKind::Io(io_err) = err.into_kind() {
                return ZiError::Io(io_err.to_string());
            }
            return ZiError::Internal("csv io error without io payload".into());
        }
        ZiError::Csv(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct configuration errors.
    pub fn config<T: Into<String>>(message: T) -> Self {
        ZiError::Config {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        ZiError::Internal(message.into())
    }
}
