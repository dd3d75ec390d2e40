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

//! Error types for the Pandora driver.
//!
//! Every failure in the invocation protocol surfaces as a [`PandoraError`].
//! Errors are returned to the caller unmodified; the driver never retries or
//! suppresses them.

use std::time::Duration;
use thiserror::Error;

use crate::response::ApplicationInfo;
use crate::version::SemanticVersion;

/// Numeric code attached to each error kind.
pub type ErrorCode = u16;

/// Errors produced while decoding engine output.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by [`Pandora`](crate::Pandora) operations.
#[derive(Debug, Error)]
pub enum PandoraError {
    #[error("pandora is not installed")]
    EngineNotInstalled,

    #[error("pandora runtime error: {reason}")]
    EngineRuntime {
        /// What went wrong with the invocation
        reason: String,
    },

    #[error("pandora did not respond within {timeout:?}")]
    EngineTimeout {
        /// The configured invocation timeout
        timeout: Duration,
    },

    #[error("failed to decode pandora output: {0}")]
    Decode(#[from] DecodeError),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("pandora reported failure: {message}")]
    CommandFailure {
        /// Message returned by the engine
        message: String,
        /// The engine's view of the calling application
        initiator: ApplicationInfo,
    },

    #[error("Required Pandora {required}; installed {found}")]
    VersionUnsatisfied {
        required: SemanticVersion,
        found: SemanticVersion,
    },

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

impl PandoraError {
    /// Returns the numeric code for this error kind.
    ///
    /// Codes are grouped by origin: 1xx engine, 2xx decoding, 3xx
    /// authentication, 4xx engine-reported failures, 5xx version policy and
    /// 6xx configuration.
    pub fn code(&self) -> ErrorCode {
        match self {
            PandoraError::EngineNotInstalled => 100,
            PandoraError::EngineRuntime { .. } => 101,
            PandoraError::EngineTimeout { .. } => 102,
            PandoraError::Decode(_) => 200,
            PandoraError::InvalidSignature => 300,
            PandoraError::CommandFailure { .. } => 400,
            PandoraError::VersionUnsatisfied { .. } => 500,
            PandoraError::Config { .. } => 600,
        }
    }

    pub(crate) fn runtime(reason: impl Into<String>) -> Self {
        PandoraError::EngineRuntime {
            reason: reason.into(),
        }
    }
}
