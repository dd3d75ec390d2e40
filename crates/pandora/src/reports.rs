/*
 *  Copyright 2025-2026 Colliery Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Results returned to callers of [`Pandora`](crate::Pandora).

use serde::Serialize;

use crate::response::ApplicationInfo;
use crate::version::SemanticVersion;

/// Outcome of a successful decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecryptionReport {
    pub application: ApplicationInfo,
    pub plain: String,
}

/// Outcome of a successful encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptionReport {
    pub application: ApplicationInfo,
    pub cipher: String,
}

/// Whether the installed engine meets the configured minimum version.
///
/// Both versions are `None` when no minimum is configured; otherwise both are
/// populated regardless of the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionSatisfactionReport {
    pub is_satisfied: bool,
    pub minimum_version: Option<SemanticVersion>,
    pub found_version: Option<SemanticVersion>,
}

impl VersionSatisfactionReport {
    pub(crate) fn unconstrained() -> Self {
        Self {
            is_satisfied: true,
            minimum_version: None,
            found_version: None,
        }
    }
}
