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

//! Structures carried over the engine's wire format.
//!
//! The engine prints a base64 [`Envelope`]; its `data` field is itself base64
//! JSON holding one of the command payloads below.

use serde::{Deserialize, Serialize};

/// The engine's view of the application that issued a command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub name: String,
    pub guid: String,
    pub author: String,
}

/// Top-level response printed by every engine invocation.
///
/// `signature` is a detached signature over the bytes of `data`. Nothing in
/// `data` may be used before that signature has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub initiator: ApplicationInfo,
    #[serde(default)]
    pub message: String,
    pub data: String,
    pub signature: String,
}

/// Payload of the `version` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResult {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Payload of the `decrypt` command; `decrypted` is base64 plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptionResult {
    pub decrypted: String,
}

/// Payload of the `encrypt` command; `encrypted` is opaque cipher text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionResult {
    pub encrypted: String,
}
