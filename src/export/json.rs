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

use crate::errors::Result;
use crate::inspect::ZiDatasetProfile;

/// Renders the profile as pretty-printed JSON with 2-space indentation.
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn to_json(profile: &ZiDatasetProfile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// Parses a JSON report back into a profile.
pub fn from_json(json: &str) -> Result<ZiDatasetProfile> {
    Ok(serde_json::from_str(json)?)
}

/// Formats a float the way the JSON report does (`1.0`, `1.5`, `1e21`).
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() {
        serde_json::Value::from(value).to_string()
    } else {
        value.to_string()
    }
}
