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

//! # Logging Backend
//!
//! Library code only talks to the `log` facade. Binaries install
//! [`ZiLogger`] once at startup to route those records to stderr as text or
//! JSON lines.

pub mod config;
pub mod core;
pub mod formatters;

pub use self::config::ZiLogConfig;
pub use self::core::{ZiLogRecord, ZiLogger};
pub use self::formatters::{ZiJsonFormatter, ZiTextFormatter};
